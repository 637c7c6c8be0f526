use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autorest_run::cli;

#[derive(Parser, Debug)]
#[command(
    name = "autorest-run",
    version,
    about = "Invoke the AutoRest code generator against an API specification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a client from an API specification file
    Generate(cli::generate::GenerateArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let code = match args.command {
        Commands::Generate(generate_args) => cli::generate::run(generate_args).await,
    };
    std::process::exit(code);
}
