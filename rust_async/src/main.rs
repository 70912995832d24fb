use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pi_estimator::{EstimatorConfig, Method, TrialRange};

/// Estimate π with one blocking tokio task per partition
#[derive(Parser)]
#[command(name = "pi_estimator_async")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Estimation method
    #[arg(value_enum)]
    method: MethodArg,

    /// Number of trials
    trials: u64,

    /// Task count (defaults to the number of available cores)
    #[arg(short, long)]
    tasks: Option<usize>,

    /// Execute exactly `trials` trials instead of `trials + 1`
    #[arg(long)]
    exclusive: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Circle,
    Buffon,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> pi_estimator_async::Result<()> {
    let method = match cli.method {
        MethodArg::Circle => Method::Circle,
        MethodArg::Buffon => Method::Buffon,
    };

    let mut builder = EstimatorConfig::builder().trial_range(if cli.exclusive {
        TrialRange::Exclusive
    } else {
        TrialRange::Inclusive
    });
    if let Some(tasks) = cli.tasks {
        builder = builder.threads(tasks);
    }
    let config = builder.build()?;

    info!(%method, trials = cli.trials, tasks = config.threads(), "starting estimate");

    let start = Instant::now();
    let estimate = pi_estimator_async::estimate(method, cli.trials, &config).await?;
    let elapsed = start.elapsed();

    println!("Pi estimation ({method}, {} async tasks)", config.threads());
    println!("Total samples: {}", estimate.executed);
    println!("Hits: {}", estimate.hits);
    println!("Pi estimate: {:.6}", estimate.value);
    println!("Error: {:.6}", std::f64::consts::PI - estimate.value);
    println!("Time: {}ms", elapsed.as_millis());

    Ok(())
}
