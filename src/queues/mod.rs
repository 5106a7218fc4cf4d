pub mod departure_buffer;
pub mod mm1k_generator;
pub mod observer_generator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
    Observer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    kind: EventKind,
    time: f64,
}

impl Event {
    pub fn new (kind: EventKind, time: f64) -> Self {
        Event { kind, time }
    }

    pub fn arrival (time: f64) -> Self {
        Event::new(EventKind::Arrival, time)
    }

    pub fn departure (time: f64) -> Self {
        Event::new(EventKind::Departure, time)
    }

    pub fn observer (time: f64) -> Self {
        Event::new(EventKind::Observer, time)
    }

    pub fn kind (&self) -> EventKind {
        self.kind
    }

    pub fn time (&self) -> f64 {
        self.time
    }
}
