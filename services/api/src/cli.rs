use crate::demo::{run_catalog_list, run_catalog_show, run_demo, DemoArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sc_buddy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SC Buddy",
    about = "Serve and demo the SC Buddy supply-chain calculator from the command line",
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
    /// Inspect the metric catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Evaluate metrics end to end in the terminal
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print every category, metric, formula, and required input
    List,
    /// Print a single metric card
    Show(ShowArgs),
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
        Command::Catalog {
            command: CatalogCommand::List,
        } => run_catalog_list(),
        Command::Catalog {
            command: CatalogCommand::Show(args),
        } => run_catalog_show(args),
        Command::Demo(args) => run_demo(args),
    }
}
