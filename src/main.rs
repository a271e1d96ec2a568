//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use sports_dash::{
    cli::{Commands, SportsDash},
    commands::{
        cfb::handle_cfb, dashboard::handle_dashboard, demo::handle_demo, soccer::handle_soccer,
    },
    config::{load_dotenv, Config},
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so report output on stdout stays clean. The dashboard
/// owns the terminal, so it only logs when `RUST_LOG` asks for it.
fn init_tracing(verbose: u8, dashboard: bool) {
    let default = match (dashboard, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    load_dotenv();
    let app = SportsDash::parse();
    init_tracing(app.verbose, matches!(app.command, Commands::Dashboard(_)));

    let config = Config::from_env();
    let result = match app.command {
        Commands::Cfb { cmd } => handle_cfb(cmd, &config).await,
        Commands::Soccer { cmd } => handle_soccer(cmd, &config).await,
        Commands::Demo(args) => handle_demo(args),
        Commands::Dashboard(args) => handle_dashboard(args, &config).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
