//! Emit random IPv4 addresses, one per line, on stdout.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use ipv4gen::{config::Config, run};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, util::SubscriberInitExt};

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("Run failed: {0}")]
    Run(#[from] run::Error),
    #[error("Failed to flush output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Run(e) => e.is_broken_pipe(),
            Error::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// How many addresses do you wish to generate? Accepts 0x, 0o and 0b
    /// prefixes. Negative values generate none, malformed values use the
    /// default of 10000000.
    #[clap(long, value_name = "INT", allow_hyphen_values = true)]
    count: Option<String>,
}

fn generate(config: Config) -> Result<run::Summary, Error> {
    // Seeded once per process; output is not reproducible across runs.
    let rng = SmallRng::from_rng(&mut rand::rng());
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let summary = run::Run::new(config).spin(rng, &mut writer)?;
    writer.flush()?;
    Ok(summary)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish()
        .init();

    let version = env!("CARGO_PKG_VERSION");
    debug!("Starting ipv4gen {version} run.");

    let args = Args::parse();
    let config = Config::from_count_arg(args.count.as_deref());

    match generate(config) {
        Ok(summary) => {
            info!("Run complete: {} lines.", summary.lines);
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed by reader, stopping early.");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
