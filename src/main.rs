use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ledgerview::cli::{Cli, Command, render_report};
use ledgerview::core::build_dashboard;
use ledgerview::data::load_snapshot;
use ledgerview::error::Result;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let snapshot = load_snapshot(cli.snapshot.as_deref())?;

    match cli.command {
        Command::Serve { port } => {
            ledgerview::api::run_http_server(snapshot, port).await?;
        }
        Command::Project(args) => {
            let scenario = args.scenario();
            let today = args.today()?;
            let dashboard = build_dashboard(&snapshot, &scenario, today);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print!("{}", render_report(&snapshot, &dashboard, today));
            }
        }
        Command::Snapshot => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
