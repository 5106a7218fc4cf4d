use mm1k_sim::distribution::ExpVariate;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn exponential_mean_matches_inverse_rate() {
    let mut rng = StdRng::seed_from_u64(1234);
    for &rate in &[0.5, 1., 500., 5000.] {
        let exp = ExpVariate::new(rate).unwrap();
        let samples: Vec<f64> = (0..100_000).map(|_| exp.sample(&mut rng)).collect();
        let mean = statistical::mean(&samples);
        assert!((mean * rate - 1.).abs() < 0.02, "rate {}: mean {}", rate, mean);
        assert!((exp.mean() - 1. / rate).abs() < 1e-15);
    }
}

#[test]
fn seeded_streams_repeat() {
    let exp = ExpVariate::new(3.).unwrap();
    let a: Vec<f64> = (0..10).map({ let mut r = StdRng::seed_from_u64(5); move |_| exp.sample(&mut r) }).collect();
    let b: Vec<f64> = (0..10).map({ let mut r = StdRng::seed_from_u64(5); move |_| exp.sample(&mut r) }).collect();
    assert_eq!(a, b);
}
