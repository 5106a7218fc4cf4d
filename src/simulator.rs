use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SimConfig;
use crate::error::{ensure_positive, Result, SimError};
use crate::queues::mm1k_generator::MM1KGenerator;
use crate::queues::observer_generator::ObserverGenerator;
use crate::scheduler::EventScheduler;
use crate::stats::{reduce, RunSummary, SimulationResult};

/// Owns the configuration and the random stream shared by successive runs.
pub struct MM1KSimulator {
    config: SimConfig,
    rng: StdRng,
}

impl MM1KSimulator {
    pub fn new (config: SimConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(MM1KSimulator { config, rng })
    }

    pub fn config (&self) -> &SimConfig {
        &self.config
    }

    pub fn run_simulation (&mut self, lambda: f64, horizon: f64, buffer_size: usize) -> Result<SimulationResult> {
        run_simulation_with(&self.config, &mut self.rng, lambda, horizon, buffer_size)
    }
}

/// Runs one simulation: arrivals/departures, then observers, then ordering,
/// then reduction. Draws from `rng` in that fixed order.
pub fn run_simulation_with<R: Rng + ?Sized> (config: &SimConfig,
                                             rng: &mut R,
                                             lambda: f64,
                                             horizon: f64,
                                             buffer_size: usize) -> Result<SimulationResult> {
    ensure_positive("lambda", lambda)?;
    ensure_positive("horizon", horizon)?;
    if buffer_size < 1 {
        return Err(SimError::InvalidParameter("buffer size must be >= 1".to_owned()));
    }
    config.validate()?;

    let offered_load = config.offered_load(lambda);
    info!(lambda, horizon, buffer_size, rho = offered_load, "simulation started");

    let arrivals = MM1KGenerator::new(horizon, lambda, buffer_size, config.service_rate())?
        .with_expiry(config.expiry)
        .generate(rng);
    let observers = ObserverGenerator::new(horizon, config.observer_factor * lambda)?
        .generate(rng);

    let mut scheduler = EventScheduler::with_capacity(arrivals.events.len() + observers.len());
    scheduler.schedule_all(arrivals.events)?;
    scheduler.schedule_all(observers)?;

    let result = reduce(scheduler, RunSummary {
        offered_load,
        buffer_size,
        arrivals_generated: arrivals.arrivals_generated,
        dropped: arrivals.dropped,
        horizon,
        lambda,
    })?;

    info!(en = result.mean_number_in_system,
          p_idle = result.idle_probability,
          p_loss = result.loss_probability,
          "simulation completed");
    Ok(result)
}
