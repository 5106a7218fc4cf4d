//! M/M/1/K queue simulator.
//!
//! Poisson arrivals feed a single server with exponential service and room
//! for K packets; arrivals finding K packets in system are dropped. An
//! independent, faster Poisson stream of observers samples the system to
//! estimate the time-average number in system and the idle probability.

pub mod config;
pub mod distribution;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod queues;
pub mod report;
pub mod scheduler;
pub mod simulator;
pub mod stats;
pub mod sweep;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use queues::departure_buffer::ExpiryPolicy;
pub use queues::{Event, EventKind};
pub use simulator::{run_simulation_with, MM1KSimulator};
pub use stats::SimulationResult;
pub use sweep::{SweepPlan, SweepPoint};
