use crate::demo::{run_demo, run_questionnaire, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hse_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HSE-IT Risk Assessment Service",
    about = "Serve and demonstrate the HSE-IT psychosocial risk assessment workflow",
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
    /// Run a scoring demo over a synthetic assessment campaign
    Demo(DemoArgs),
    /// Print the 35-item questionnaire grouped by risk domain
    Questionnaire,
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
        Command::Demo(args) => run_demo(args),
        Command::Questionnaire => run_questionnaire(),
    }
}
