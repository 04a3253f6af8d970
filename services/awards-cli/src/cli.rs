use crate::evaluate::{run_evaluation, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use club_awards::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Club Awards",
    about = "Evaluate shooting-club season exports against award thresholds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the newest season export and write result files (default command)
    Evaluate(EvaluateArgs),
    /// Start the HTTP service
    Serve(ServeArgs),
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
        .unwrap_or_else(|| Command::Evaluate(EvaluateArgs::default()));

    match command {
        Command::Evaluate(args) => run_evaluation(args),
        Command::Serve(args) => server::run(args).await,
    }
}
