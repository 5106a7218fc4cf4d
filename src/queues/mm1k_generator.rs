use rand::Rng;
use rand::distributions::Distribution;
use tracing::{debug, trace};

use crate::distribution::ExpVariate;
use crate::error::{ensure_positive, Result, SimError};
use crate::queues::departure_buffer::{DepartureBuffer, ExpiryPolicy};
use crate::queues::Event;

/// Arrival and departure events of one run, with the admission counters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrivalTrace {
    pub events: Vec<Event>,
    pub arrivals_generated: u64,
    pub dropped: u64,
}

/// Poisson arrivals into a single FIFO server with room for `buffer_size` packets.
pub struct MM1KGenerator {
    horizon: f64,
    buffer_size: usize,
    iat_distribution: ExpVariate,
    service_distribution: ExpVariate,
    expiry: ExpiryPolicy,
}

impl MM1KGenerator {
    pub fn new (horizon: f64, lambda: f64, buffer_size: usize, service_rate: f64) -> Result<Self> {
        if buffer_size < 1 {
            return Err(SimError::InvalidParameter("buffer size must be >= 1".to_owned()));
        }
        Ok(MM1KGenerator {
            horizon,
            buffer_size,
            iat_distribution: ExpVariate::new(ensure_positive("lambda", lambda)?)?,
            service_distribution: ExpVariate::new(ensure_positive("service rate", service_rate)?)?,
            expiry: ExpiryPolicy::default(),
        })
    }

    pub fn with_expiry (mut self, expiry: ExpiryPolicy) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn generate<R: Rng + ?Sized> (&self, rng: &mut R) -> ArrivalTrace {
        let mut out = ArrivalTrace::default();
        if !(self.horizon > 0.) {
            return out;
        }

        let mut buffer = DepartureBuffer::new(self.buffer_size, self.expiry);
        let mut time = 0.;
        let mut backlog: f64 = 0.;

        loop {
            let step = self.iat_distribution.sample(rng);
            let arrival = time + step;
            if arrival > self.horizon {
                break;
            }

            buffer.expire(arrival);
            out.arrivals_generated += 1;

            // The server drains its backlog during the gap
            backlog = (backlog - step).max(0.);

            let service = self.service_distribution.sample(rng);
            let departure = arrival + backlog + service;

            if buffer.try_admit(departure) {
                out.events.push(Event::arrival(arrival));
                backlog += service;
                if departure < self.horizon {
                    out.events.push(Event::departure(departure));
                }
            }
            else {
                out.dropped += 1;
                trace!(time = arrival, in_system = buffer.len(), "packet dropped");
            }

            time = arrival;
        }

        debug!(generated = out.arrivals_generated,
               dropped = out.dropped,
               events = out.events.len(),
               "arrival/departure generation done");
        out
    }
}
