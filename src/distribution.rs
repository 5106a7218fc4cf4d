use rand::Rng;
use rand::distributions::Distribution;

use crate::error::{ensure_positive, Result};

/// Exponential variate drawn by inverse transform over a uniform sample in [0, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpVariate {
    rate: f64
}

impl ExpVariate {
    pub fn new (rate: f64) -> Result<Self> {
        Ok(ExpVariate { rate: ensure_positive("rate", rate)? })
    }

    pub fn mean (&self) -> f64 {
        1. / self.rate
    }
}

impl Distribution<f64> for ExpVariate {
    fn sample<R: Rng + ?Sized> (&self, rng: &mut R) -> f64 {
        let mut u: f64 = rng.gen();
        // ln(0) is undefined
        while u >= 1. {
            u = rng.gen();
        }
        -(1. / self.rate) * (1. - u).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empirical_mean_converges() {
        let mut rng = StdRng::seed_from_u64(7);
        let exp = ExpVariate::new(4.).unwrap();
        let n = 200_000;
        let samples: Vec<f64> = (0..n).map(|_| exp.sample(&mut rng)).collect();
        let mean = statistical::mean(&samples);
        assert!((mean - 0.25).abs() < 0.25 * 0.02, "mean = {}", mean);
        assert!(samples.iter().all(|s| *s >= 0. && s.is_finite()));
    }

    #[test]
    fn zero_uniform_gives_zero_sample() {
        let mut rng = StepRng::new(0, 0);
        let exp = ExpVariate::new(3.).unwrap();
        assert_eq!(exp.sample(&mut rng), 0.);
    }

    #[test]
    fn rejects_non_positive_rate() {
        assert!(ExpVariate::new(0.).is_err());
        assert!(ExpVariate::new(-2.).is_err());
        assert!(ExpVariate::new(std::f64::NAN).is_err());
    }
}
