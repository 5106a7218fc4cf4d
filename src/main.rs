use std::env;
use std::io;
use std::process;

use tracing::error;

use mm1k_sim::logging::init_logging;
use mm1k_sim::report::CsvReport;
use mm1k_sim::{ExpiryPolicy, MM1KSimulator, Result, SimConfig, SimError, SweepPlan};

const USAGE: &str = "usage:
    mm1k_sim run <lambda> <horizon> <K> [--seed N] [--legacy-expiry]
    mm1k_sim sweep <horizon> <out.csv> [--replications N] [--seed N] [--legacy-expiry]";

fn parse<T: std::str::FromStr> (name: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| SimError::InvalidParameter(format!("missing {}", name)))?;
    value.parse::<T>()
         .map_err(|_| SimError::InvalidParameter(format!("cannot parse {} from '{}'", name, value)))
}

struct Flags {
    seed: Option<u64>,
    replications: usize,
    expiry: ExpiryPolicy,
}

fn parse_flags (mut args: impl Iterator<Item = String>, sweep: bool) -> Result<Flags> {
    let mut flags = Flags { seed: None, replications: 1, expiry: ExpiryPolicy::Exhaustive };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => flags.seed = Some(parse("seed", args.next())?),
            "--replications" if sweep => flags.replications = parse("replications", args.next())?,
            "--legacy-expiry" => flags.expiry = ExpiryPolicy::SkipAfterRemoval,
            _ => return Err(SimError::InvalidParameter(format!("unrecognized flag: {}", arg)))
        }
    }
    Ok(flags)
}

fn run_single (mut args: env::Args) -> Result<()> {
    let lambda: f64 = parse("lambda", args.next())?;
    let horizon: f64 = parse("horizon", args.next())?;
    let k: usize = parse("K", args.next())?;
    let flags = parse_flags(args, false)?;

    let mut config = SimConfig::default().with_expiry(flags.expiry);
    config.seed = flags.seed;
    let mut sim = MM1KSimulator::new(config)?;
    let res = sim.run_simulation(lambda, horizon, k)?;

    let mut report = CsvReport::new(io::stdout());
    report.write_result(&res)?;
    report.into_inner()?;
    Ok(())
}

fn run_sweep (mut args: env::Args) -> Result<()> {
    let horizon: f64 = parse("horizon", args.next())?;
    let out: String = parse("output file", args.next())?;
    let flags = parse_flags(args, true)?;

    let config = SimConfig::default().with_expiry(flags.expiry);
    let plan = SweepPlan { horizon, replications: flags.replications, ..SweepPlan::default() };
    let points = plan.run(&config, flags.seed.unwrap_or(0))?;

    let mut report = CsvReport::create(&out)?;
    report.write_sweep(&points)?;
    report.into_inner()?;
    Ok(())
}

fn main() {
    init_logging();

    let mut args = env::args();
    args.next();
    let outcome = match args.next().as_ref().map(|s| s.as_str()) {
        Some("run") => run_single(args),
        Some("sweep") => run_sweep(args),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args (list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn run_rejects_replications() {
        match parse_flags(args(&["--replications", "3"]), false) {
            Err(SimError::InvalidParameter(msg)) => assert!(msg.contains("--replications")),
            other => panic!("unexpected {:?}", other.map(|f| f.replications)),
        }
    }

    #[test]
    fn sweep_accepts_replications_and_seed() {
        let flags = parse_flags(args(&["--replications", "3", "--seed", "7", "--legacy-expiry"]), true).unwrap();
        assert_eq!(flags.replications, 3);
        assert_eq!(flags.seed, Some(7));
        assert_eq!(flags.expiry, ExpiryPolicy::SkipAfterRemoval);
    }
}
