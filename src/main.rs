//! `matrix_demo` binary: prints a few matrices and their products.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use matrix_demo::demo::{self, DemoConfig};
use matrix_demo::random::UniformRange;
use matrix_demo::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "matrix_demo")]
#[command(about = "Build, multiply and print fixed and dynamic matrices", long_about = None)]
struct Cli {
    /// Seed for the random matrices (random every run when omitted)
    #[arg(long, env = "MATRIX_DEMO_SEED")]
    seed: Option<u64>,

    /// Significant digits per printed entry
    #[arg(long, env = "MATRIX_DEMO_PRECISION", default_value_t = 6,
          value_parser = clap::value_parser!(u8).range(1..=17))]
    precision: u8,

    /// Lower bound of random entries
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    low: f64,

    /// Upper bound of random entries
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    high: f64,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing().context("failed to initialize logging")?;
    debug!(?cli, "parsed arguments");

    let config = DemoConfig {
        seed: cli.seed,
        precision: usize::from(cli.precision),
        range: UniformRange::new(cli.low, cli.high).context("invalid --low/--high")?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &config).context("demo failed")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
