use anyhow::Context;
use clap::Parser;
use content_planner::{
    JsonFileStorage, PlanStore, PlannerConfig, Shell, ShellExit, TerminalInput,
};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "planner", about = "Plan video content entries interactively")]
struct Cli {
    /// JSON file holding the plans
    #[arg(long, default_value = content_planner::DEFAULT_PLANS_FILE)]
    plans_file: PathBuf,

    /// Spreadsheet written by the export menu option
    #[arg(long, default_value = content_planner::DEFAULT_EXPORT_FILE)]
    export_file: PathBuf,

    /// Do not clear the terminal before showing the menu
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = PlannerConfig::default()
        .with_plans_path(cli.plans_file)
        .with_export_path(cli.export_file)
        .with_clear_screen(!cli.no_clear);
    debug!(?config, "starting planner");

    let input = TerminalInput::spawn().context("failed to install Ctrl-C handler")?;
    let (store, loaded) = PlanStore::open(JsonFileStorage::new(config.plans_path.clone()));

    let mut shell = Shell::new(store, input, io::stdout(), config);
    if let Err(err) = loaded {
        shell = shell.with_notice(format!("Error loading plans: {err}"));
    }

    let exit = shell.run().context("failed to write to the terminal")?;
    if exit != ShellExit::Requested {
        info!(?exit, "planner stopped");
    }
    Ok(())
}
