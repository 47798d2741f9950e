//! Interactive text cache driver.
//!
//! Enter a text number to fetch it through a FIFO cache, `-1` to run the
//! full policy/workload simulation, `0` to exit.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use textcache::simulation::report;
use textcache::storage::corpus::{self, DEFAULT_TARGET_WORDS};
use textcache::{
    DiskTextStore, Error, PolicyKind, Result, Session, SimulationConfig, Simulator,
};

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = SimulationConfig::from_env()?;
    ensure_corpus(&config)?;

    let store = DiskTextStore::new(&config.texts_dir).with_latency(config.load_latency);
    let mut session = Session::new(config.cache, PolicyKind::Fifo, store.clone())?;
    let domain = config.cache.key_domain_size;

    println!("Text Cache System");
    println!("-----------------");
    println!("Enter text number (1-{})", domain);
    println!("0 to exit, -1 for simulation\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Text: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let Ok(choice) = line.trim().parse::<i64>() else {
            println!("Invalid number! Use 1-{}", domain);
            continue;
        };

        match choice {
            0 => {
                println!("Exiting...");
                break;
            }
            -1 => {
                run_simulation(&config, store.clone())?;
                println!("\nReturning to interactive mode...");
                session.reset();
            }
            raw => match session.request(raw) {
                Ok(served) => {
                    let status = if served.hit { "HIT" } else { "MISS" };
                    println!(
                        "[{}] Text {} loaded in {}ms",
                        status,
                        served.id.0,
                        served.elapsed.as_millis()
                    );
                    println!("First 100 chars: {}...", served.preview(100));

                    let stats = session.stats();
                    println!(
                        "Cache stats: {} hits, {} misses, hit rate = {:.1}%\n",
                        stats.hits,
                        stats.misses,
                        stats.hit_rate() * 100.0
                    );
                }
                Err(Error::KeyOutOfDomain { .. }) => {
                    println!("Invalid number! Use 1-{}", domain);
                }
                Err(err) => return Err(err),
            },
        }
    }

    Ok(())
}

fn ensure_corpus(config: &SimulationConfig) -> Result<()> {
    if config.texts_dir.is_dir() {
        return Ok(());
    }
    warn!(dir = %config.texts_dir.display(), "texts directory missing, generating corpus");
    corpus::generate_corpus(
        &config.texts_dir,
        config.cache.key_domain_size,
        DEFAULT_TARGET_WORDS,
    )?;
    Ok(())
}

fn run_simulation(config: &SimulationConfig, store: DiskTextStore) -> Result<()> {
    println!("\n=== SIMULATION MODE ===\n");
    println!(
        "Running {} users x {} requests each",
        config.users, config.requests_per_user
    );
    println!(
        "Testing {} algorithms x {} patterns\n",
        PolicyKind::ALL.len(),
        textcache::Distribution::ALL.len()
    );

    let mut simulator = Simulator::new(config.clone(), store)?;
    let results = simulator.run_all();

    for r in &results {
        println!(
            "{} + {}: Hit Rate = {:.2}%, Avg Time = {:.2}ms",
            r.policy, r.distribution, r.hit_rate_pct, r.avg_time_ms
        );
    }

    report::write_csv(&config.results_path, &results)?;
    info!(path = %config.results_path.display(), rows = results.len(), "results written");

    println!("\nSimulation complete!");
    println!("Results saved to {}", config.results_path.display());
    print!("{}", report::render_summary(&results));
    Ok(())
}
