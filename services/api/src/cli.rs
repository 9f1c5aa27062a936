use caretime::error::AppError;
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_evaluate, EvaluateArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Care Assessment Service",
    about = "Run the care-needs certification scoring service from the command line",
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
    /// Evaluate a survey response from a JSON file and print the outcome
    Evaluate(EvaluateArgs),
    /// Evaluate two built-in sample surveys and print their outcomes
    Demo,
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo => run_demo(),
    }
}
