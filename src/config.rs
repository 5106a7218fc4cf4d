use crate::error::{ensure_positive, Result};
use crate::queues::departure_buffer::ExpiryPolicy;

pub const DEFAULT_PACKET_SIZE_BITS: f64 = 2000.;
pub const DEFAULT_LINK_RATE_BPS: f64 = 1_000_000.;
pub const DEFAULT_OBSERVER_FACTOR: f64 = 5.;

/// Fixed parameters shared by every run: packet size L, link rate C,
/// observer oversampling factor, buffer expiry policy and RNG seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub packet_size_bits: f64,
    pub link_rate_bps: f64,
    pub observer_factor: f64,
    pub expiry: ExpiryPolicy,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default () -> Self {
        SimConfig {
            packet_size_bits: DEFAULT_PACKET_SIZE_BITS,
            link_rate_bps: DEFAULT_LINK_RATE_BPS,
            observer_factor: DEFAULT_OBSERVER_FACTOR,
            expiry: ExpiryPolicy::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_packet_size (mut self, bits: f64) -> Self {
        self.packet_size_bits = bits;
        self
    }

    pub fn with_link_rate (mut self, bps: f64) -> Self {
        self.link_rate_bps = bps;
        self
    }

    pub fn with_observer_factor (mut self, factor: f64) -> Self {
        self.observer_factor = factor;
        self
    }

    pub fn with_expiry (mut self, expiry: ExpiryPolicy) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_seed (mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate (&self) -> Result<()> {
        ensure_positive("packet_size_bits", self.packet_size_bits)?;
        ensure_positive("link_rate_bps", self.link_rate_bps)?;
        ensure_positive("observer_factor", self.observer_factor)?;
        Ok(())
    }

    /// Service rate C/L in packets per second.
    pub fn service_rate (&self) -> f64 {
        self.link_rate_bps / self.packet_size_bits
    }

    /// rho = lambda * L / C
    pub fn offered_load (&self, lambda: f64) -> f64 {
        lambda / self.service_rate()
    }

    /// Arrival rate producing offered load `rho`.
    pub fn lambda_for_load (&self, rho: f64) -> f64 {
        rho * self.service_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lab_parameters() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.service_rate(), 500.);
        assert!((cfg.offered_load(1.) - 0.002).abs() < 1e-12);
        assert!((cfg.lambda_for_load(0.5) - 250.).abs() < 1e-9);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_link_rate() {
        assert!(SimConfig::default().with_link_rate(0.).validate().is_err());
        assert!(SimConfig::default().with_observer_factor(-5.).validate().is_err());
    }
}
