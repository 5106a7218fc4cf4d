//! Batch driver running the simulator over a grid of offered loads and
//! buffer sizes, with independent replications per grid point.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::SimConfig;
use crate::error::{ensure_positive, Result, SimError};
use crate::simulator::run_simulation_with;

#[derive(Clone, Debug, PartialEq)]
pub struct SweepPlan {
    pub rhos: Vec<f64>,
    pub buffer_sizes: Vec<usize>,
    pub horizon: f64,
    pub replications: usize,
}

impl Default for SweepPlan {
    fn default () -> Self {
        SweepPlan {
            rhos: (5..=15).map(|i| i as f64 / 10.).collect(),
            buffer_sizes: vec![10, 25, 50],
            horizon: 1000.,
            replications: 1,
        }
    }
}

/// Replication averages for one (rho, K) point.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    pub rho: f64,
    pub buffer_size: usize,
    pub mean_en: f64,
    pub std_en: f64,
    pub mean_loss: f64,
    pub std_loss: f64,
    pub mean_idle: f64,
}

fn spread (samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        0.
    }
    else {
        statistical::standard_deviation(samples, None)
    }
}

impl SweepPlan {
    pub fn validate (&self) -> Result<()> {
        ensure_positive("horizon", self.horizon)?;
        if self.replications == 0 {
            return Err(SimError::InvalidParameter("replications must be >= 1".to_owned()));
        }
        for rho in self.rhos.iter() {
            ensure_positive("rho", *rho)?;
        }
        if self.buffer_sizes.iter().any(|&k| k == 0) {
            return Err(SimError::InvalidParameter("buffer size must be >= 1".to_owned()));
        }
        Ok(())
    }

    /// Runs every grid point. Replication `r` of the point with index `p` is
    /// seeded from `base_seed`, `p` and `r` so points can be rerun in isolation.
    pub fn run (&self, config: &SimConfig, base_seed: u64) -> Result<Vec<SweepPoint>> {
        self.validate()?;
        let mut points = Vec::with_capacity(self.rhos.len() * self.buffer_sizes.len());
        let mut index: u64 = 0;
        for &k in self.buffer_sizes.iter() {
            for &rho in self.rhos.iter() {
                let lambda = config.lambda_for_load(rho);
                let mut en = Vec::with_capacity(self.replications);
                let mut loss = Vec::with_capacity(self.replications);
                let mut idle = Vec::with_capacity(self.replications);
                for r in 0..self.replications as u64 {
                    let seed = base_seed
                        .wrapping_add(index.wrapping_mul(1_000_003))
                        .wrapping_add(r);
                    let mut rng = StdRng::seed_from_u64(seed);
                    let res = run_simulation_with(config, &mut rng, lambda, self.horizon, k)?;
                    en.push(res.mean_number_in_system);
                    loss.push(res.loss_probability);
                    idle.push(res.idle_probability);
                }
                let point = SweepPoint {
                    rho,
                    buffer_size: k,
                    mean_en: statistical::mean(&en),
                    std_en: spread(&en),
                    mean_loss: statistical::mean(&loss),
                    std_loss: spread(&loss),
                    mean_idle: statistical::mean(&idle),
                };
                info!(rho, k, en = point.mean_en, loss = point.mean_loss, "sweep point done");
                points.push(point);
                index += 1;
            }
        }
        Ok(points)
    }
}
