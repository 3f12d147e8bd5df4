use std::path::{Path, PathBuf};

mod check;
mod list;
mod terminal;
mod validate;

use check::Check;
use clap::ArgAction;
use eligibility::{Catalog, Company, Config};
use list::List;
use validate::Validate;

/// Looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = ".elig.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file [default: .elig.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Check(Check::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Evaluate a candidate against every company (default)
    Check(Check),

    /// List companies and their requirements
    List(List),

    /// Check that a catalog file describes valid companies
    Validate(Validate),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(config)?,
            Self::List(command) => command.run(config)?,
            Self::Validate(command) => command.run()?,
        }
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        }
    };
    Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Load companies from the explicit catalog, else the configured one, else
/// the built-in sample.
fn load_companies(catalog: Option<&Path>, config: &Config) -> anyhow::Result<Vec<Company>> {
    match catalog.or_else(|| config.catalog()) {
        Some(path) => {
            tracing::info!("Using catalog {}", path.display());
            Catalog::load(path)
                .map(Catalog::into_companies)
                .map_err(|e| {
                    anyhow::Error::new(e)
                        .context(format!("Failed to load catalog {}", path.display()))
                })
        }
        None => {
            tracing::info!("Using built-in sample catalog");
            Ok(eligibility::sample::companies()?)
        }
    }
}
