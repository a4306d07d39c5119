use crate::demo::{run_demo, DemoArgs};
use crate::menu::{run_menu, MenuArgs};
use clap::{Parser, Subcommand};
use hall::config::AppConfig;
use hall::error::AppError;
use hall::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Student Hall Management System",
    about = "Register residents, allocate hall rooms, and log maintenance requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive hall menu (default command)
    Menu(MenuArgs),
    /// Run a scripted allocation session and print the resulting hall state
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Menu(MenuArgs::default()));

    match command {
        Command::Menu(args) => run_menu(args, config),
        Command::Demo(args) => run_demo(args, config),
    }
}
