use rand::Rng;
use rand::distributions::Distribution;
use tracing::debug;

use crate::distribution::ExpVariate;
use crate::error::Result;
use crate::queues::Event;

/// Independent Poisson sampling process used to take time averages.
pub struct ObserverGenerator {
    horizon: f64,
    iat_distribution: ExpVariate,
}

impl ObserverGenerator {
    pub fn new (horizon: f64, rate: f64) -> Result<Self> {
        Ok(ObserverGenerator {
            horizon,
            iat_distribution: ExpVariate::new(rate)?,
        })
    }

    pub fn generate<R: Rng + ?Sized> (&self, rng: &mut R) -> Vec<Event> {
        let mut events = Vec::new();
        let mut time = 0.;
        while time < self.horizon {
            let next = time + self.iat_distribution.sample(rng);
            if next > self.horizon {
                break;
            }
            events.push(Event::observer(next));
            time = next;
        }
        debug!(observers = events.len(), "observer generation done");
        events
    }
}
