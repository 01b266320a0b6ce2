mod inspect;

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use {
    clap::{Parser, Subcommand},
    rtm_config::{Discovered, LoggingConfig},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "rtm", about = "Inspect RTM chat protocol messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file to load instead of searching for `rtm.toml`.
    #[arg(long, global = true, env = "RTM_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify newline-delimited JSON messages and print one summary per line.
    Inspect {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
        /// Bot uid for mention and access checks (overrides `bot.uid`).
        #[arg(long)]
        uid: Option<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_telemetry(cli: &Cli, logging: &LoggingConfig) {
    let level = cli
        .log_level
        .clone()
        .or_else(|| logging.level.clone())
        .unwrap_or_else(|| "warn".into());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs || logging.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(io::stderr),
            )
            .init();
    }
}

/// An explicit `--config` path must load; a discovered file may fail and is
/// reported once telemetry is up.
fn discover_config(cli: &Cli) -> anyhow::Result<Discovered> {
    match &cli.config {
        Some(path) => Ok(Discovered::Loaded {
            config: rtm_config::load_config(path)?,
            path: path.clone(),
        }),
        None => Ok(rtm_config::discover()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let discovered = discover_config(&cli)?;
    init_telemetry(&cli, &discovered.logging());
    let config = discovered.into_config();

    match &cli.command {
        Commands::Inspect { file, uid } => {
            let bot_uid = uid.as_deref().or(config.bot.uid.as_deref());
            let stdout = io::stdout().lock();
            let stats = match file {
                Some(path) => {
                    let input = File::open(path)
                        .map_err(|e| anyhow::anyhow!("failed to open {}: {e}", path.display()))?;
                    inspect::run(BufReader::new(input), stdout, bot_uid, &config.access)?
                },
                None => inspect::run(io::stdin().lock(), stdout, bot_uid, &config.access)?,
            };
            info!(
                decoded = stats.decoded,
                skipped = stats.skipped,
                "inspection finished"
            );
        },
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
