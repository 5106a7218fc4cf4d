//! Single-pass reduction of the ordered event stream into time averages.
//!
//! Observers sample the number of packets in system (arrivals seen minus
//! departures seen); the server is idle at an observer when the two counts
//! match.

use tracing::debug;

use crate::error::{Result, SimError};
use crate::queues::{Event, EventKind};

/// Aggregate statistics of one M/M/1/K run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub offered_load: f64,
    pub buffer_size: usize,
    pub mean_number_in_system: f64,
    pub idle_probability: f64,
    pub loss_probability: f64,
    pub arrivals_generated: u64,
    pub dropped: u64,
    pub observers: u64,
}

/// Running counters of the reduction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventCounters {
    pub arrivals: u64,
    pub departures: u64,
    pub observers: u64,
    pub idle: u64,
    pub backlog_sum: u64,
}

impl EventCounters {
    pub fn record (&mut self, event: &Event) {
        match event.kind() {
            EventKind::Arrival => self.arrivals += 1,
            EventKind::Departure => self.departures += 1,
            EventKind::Observer => {
                self.observers += 1;
                if self.arrivals == self.departures {
                    self.idle += 1;
                }
                else {
                    self.backlog_sum += self.in_system();
                }
            }
        }
    }

    pub fn in_system (&self) -> u64 {
        self.arrivals.saturating_sub(self.departures)
    }
}

/// Inputs of the reduction that do not come from the event stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub offered_load: f64,
    pub buffer_size: usize,
    pub arrivals_generated: u64,
    pub dropped: u64,
    pub horizon: f64,
    pub lambda: f64,
}

pub fn reduce<I> (events: I, summary: RunSummary) -> Result<SimulationResult> where I: IntoIterator<Item = Event> {
    let mut counters = EventCounters::default();
    for event in events {
        counters.record(&event);
    }
    debug!(arrivals = counters.arrivals,
           departures = counters.departures,
           observers = counters.observers,
           idle = counters.idle,
           "event stream reduced");

    if counters.observers == 0 {
        return Err(SimError::DegenerateSimulation { horizon: summary.horizon, lambda: summary.lambda });
    }

    let observers = counters.observers as f64;
    let loss_probability = if summary.arrivals_generated == 0 {
        0.
    }
    else {
        summary.dropped as f64 / summary.arrivals_generated as f64
    };

    Ok(SimulationResult {
        offered_load: summary.offered_load,
        buffer_size: summary.buffer_size,
        mean_number_in_system: counters.backlog_sum as f64 / observers,
        idle_probability: counters.idle as f64 / observers,
        loss_probability,
        arrivals_generated: summary.arrivals_generated,
        dropped: summary.dropped,
        observers: counters.observers,
    })
}
