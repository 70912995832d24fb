use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pi_estimator::{Backend, EstimatorConfig, Method, TrialRange};

/// Estimate π by parallel Monte Carlo simulation
#[derive(Parser)]
#[command(name = "pi_estimator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Estimation method
    #[arg(value_enum)]
    method: MethodArg,

    /// Number of trials
    trials: u64,

    /// Worker count (defaults to the number of available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Thread pool executing the partitions
    #[arg(short, long, value_enum, default_value = "rayon")]
    backend: BackendArg,

    /// Execute exactly `trials` trials instead of `trials + 1`
    #[arg(long)]
    exclusive: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Circle,
    Buffon,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Rayon,
    Threads,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> pi_estimator::Result<()> {
    let method = match cli.method {
        MethodArg::Circle => Method::Circle,
        MethodArg::Buffon => Method::Buffon,
    };

    let mut builder = EstimatorConfig::builder()
        .backend(match cli.backend {
            BackendArg::Rayon => Backend::Rayon,
            BackendArg::Threads => Backend::Threads,
        })
        .trial_range(if cli.exclusive {
            TrialRange::Exclusive
        } else {
            TrialRange::Inclusive
        });
    if let Some(threads) = cli.threads {
        builder = builder.threads(threads);
    }
    let config = builder.build()?;

    info!(%method, trials = cli.trials, threads = config.threads(), "starting estimate");

    let start = Instant::now();
    let estimate = method.estimate(cli.trials, &config)?;
    let elapsed = start.elapsed();

    println!("Pi estimation ({method}, {} threads)", config.threads());
    println!("Total samples: {}", estimate.executed);
    println!("Hits: {}", estimate.hits);
    println!("Pi estimate: {:.6}", estimate.value);
    println!("Error: {:.6}", std::f64::consts::PI - estimate.value);
    println!("Time: {}ms", elapsed.as_millis());

    Ok(())
}
