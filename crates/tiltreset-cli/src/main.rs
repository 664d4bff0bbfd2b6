use clap::{Parser, Subcommand};
use tiltreset_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tiltreset", version, about = "TiltReset CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the current screen as JSON
    Dashboard(commands::dashboard::DashboardArgs),
    /// Complete practice sessions against a loaded record
    Practice(commands::practice::PracticeArgs),
    /// Exercise the mock wallet connection
    Wallet(commands::wallet::WalletArgs),
    /// Print the quote of the day
    Wisdom(commands::wisdom::WisdomArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays machine-readable.
///
/// The filter comes from the config file, so a config that fails to load
/// is only reported once the subscriber is installed.
fn init_logging() {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = load_error {
        tracing::warn!("falling back to default config: {e}");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Dashboard(args) => commands::dashboard::run(args).await,
        Commands::Practice(args) => commands::practice::run(args).await,
        Commands::Wallet(args) => commands::wallet::run(args).await,
        Commands::Wisdom(args) => commands::wisdom::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
