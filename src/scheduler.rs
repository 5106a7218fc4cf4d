use tracing::debug;

use crate::error::{Result, SimError};
use crate::helpers::float_binaryheap::FloatBinaryHeap;
use crate::queues::{Event, EventKind};

/// Merges event sets into a single stream ordered by timestamp.
///
/// Events sharing a timestamp come out in the order they were scheduled.
#[derive(Default)]
pub struct EventScheduler {
    pending: FloatBinaryHeap<EventKind>,
}

impl EventScheduler {
    pub fn new () -> Self {
        EventScheduler { pending: FloatBinaryHeap::new() }
    }

    pub fn with_capacity (capacity: usize) -> Self {
        EventScheduler { pending: FloatBinaryHeap::with_capacity(capacity) }
    }

    pub fn schedule (&mut self, event: Event) -> Result<()> {
        self.pending.push(event.time(), event.kind())
            .map_err(|_| SimError::InvalidTimestamp(event.time()))
    }

    pub fn schedule_all<I> (&mut self, events: I) -> Result<()> where I: IntoIterator<Item = Event> {
        for event in events {
            self.schedule(event)?;
        }
        Ok(())
    }

    pub fn peek_time (&self) -> Option<f64> {
        self.pending.peek().map(|(t, _)| t)
    }

    pub fn pop_next (&mut self) -> Option<Event> {
        self.pending.pop().map(|(t, kind)| Event::new(kind, t))
    }

    pub fn len (&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty (&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains every scheduled event in timestamp order.
    pub fn into_sorted (mut self) -> Vec<Event> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(event) = self.pop_next() {
            out.push(event);
        }
        debug!(events = out.len(), "event stream sorted");
        out
    }
}

impl Iterator for EventScheduler {
    type Item = Event;

    fn next (&mut self) -> Option<Event> {
        self.pop_next()
    }
}
