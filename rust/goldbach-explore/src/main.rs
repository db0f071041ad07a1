/// Goldbach exploration CLI
///
/// Usage:
///   goldbach-explore --mode=sieve   [--limit=N] [--prefix=primes.json] [--out=data]
///   goldbach-explore --mode=explore [--config=run.json] [--limit=N] [--distance-limit=N] ...
///   goldbach-explore --mode=quick   (fast smoke test, prints only)
///
/// Modes:
///   sieve    primes below limit, cached as <out>/primes_<limit>.json
///   explore  every sweep, report written to <out>/exploration_<limit>.json
///   quick    small limits, no files written
use goldbach_core::sieve;
use goldbach_explore::io::{primes_path, report_path, write_json};
use goldbach_explore::{prepare_primes, print_summary, run_exploration, ExploreConfig, ExploreError};
use std::collections::HashMap;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args);

    let mode = opts.get("mode").map(|s| s.as_str()).unwrap_or("explore");

    let result = match mode {
        "sieve" => run_sieve(&opts),
        "explore" => run_explore(&opts),
        "quick" => run_quick(&opts),
        other => {
            eprintln!("Unknown mode: {other}. Use --mode=sieve|explore|quick");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(opts: &HashMap<String, String>) -> Result<ExploreConfig, ExploreError> {
    let mut config = match opts.get("config") {
        Some(path) => ExploreConfig::from_file(path)?,
        None => ExploreConfig::default(),
    };
    config.apply_overrides(opts)?;
    Ok(config)
}

fn run_sieve(opts: &HashMap<String, String>) -> Result<(), ExploreError> {
    let config = load_config(opts)?;
    println!("SIEVE mode: primes below {}", config.limit);

    let primes = prepare_primes(&config)?;
    println!(
        "{} primes, largest {:?}",
        primes.len(),
        primes.last()
    );
    println!("Cache: {}", primes_path(&config.output_dir, config.limit).display());
    Ok(())
}

fn run_explore(opts: &HashMap<String, String>) -> Result<(), ExploreError> {
    let config = load_config(opts)?;
    config.validate()?;
    println!("EXPLORE mode: limit {}, range limit {}", config.limit, config.range_limit());
    println!(
        "Distance limit: {}, twin distance limit: {}, abundance limit: {}\n",
        config.distance_limit, config.twin_distance_limit, config.abundance_limit
    );

    let primes = prepare_primes(&config)?;
    let report = run_exploration(&config, primes)?;
    print_summary(&report);

    let path = report_path(&config.output_dir, config.limit);
    write_json(&report, &path)?;
    println!("\nResults written to {}", path.display());
    Ok(())
}

fn run_quick(opts: &HashMap<String, String>) -> Result<(), ExploreError> {
    println!("QUICK mode: smoke test (small limits)");
    let mut config = ExploreConfig::quick();
    config.apply_overrides(opts)?;
    let primes = sieve(config.limit, None)?;
    let report = run_exploration(&config, primes)?;
    print_summary(&report);
    // Quick mode: just print, no file write
    Ok(())
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_args(args: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for arg in args {
        if let Some(kv) = arg.strip_prefix("--") {
            if let Some((k, v)) = kv.split_once('=') {
                map.insert(k.to_string(), v.to_string());
            } else {
                map.insert(kv.to_string(), "true".to_string());
            }
        }
    }
    map
}
