use crate::commands::{list_activities, run_render, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use support_report::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Support Report Generator",
    about = "Generate support-needs assessment reports and serve the HTTP API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render a report request from a JSON file into a DOCX document
    Render(RenderArgs),
    /// List the 32 assessed activities with their regulation descriptions
    Activities,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Activities => {
            list_activities();
            Ok(())
        }
    }
}
