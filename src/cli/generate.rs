use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::run_cli_async;
use crate::error::Error;
use crate::runner::AutoRestRunner;
use crate::settings::{AutoRestSettings, Generator};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// API specification file to generate a client from
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Load generator settings from a TOML file; flags below override it
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Directory the generated client is written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Target language generator
    #[arg(long, value_enum)]
    pub generator: Option<Generator>,

    /// Modeler used to parse the input specification
    #[arg(long)]
    pub modeler: Option<String>,

    /// Namespace for the generated client code
    #[arg(long)]
    pub namespace: Option<String>,

    /// Name of the generated client type
    #[arg(long)]
    pub client_name: Option<String>,

    /// Emit the whole client into a single file with this name
    #[arg(long)]
    pub output_file: Option<String>,

    /// Flatten payloads with at most this many properties
    #[arg(long)]
    pub payload_flattening_threshold: Option<u32>,

    /// Generate a credential property on the client
    #[arg(long)]
    pub add_credentials: bool,

    /// License header comment for generated files
    #[arg(long)]
    pub header: Option<String>,

    /// Ask AutoRest for verbose output
    #[arg(long)]
    pub verbose: bool,
}

pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: GenerateArgs) -> Result<(), Error> {
    let mut settings = match &args.settings {
        Some(path) => {
            debug!(path = %path.display(), "loading settings file");
            AutoRestSettings::from_file(path)?
        }
        None => AutoRestSettings::default(),
    };

    if let Some(dir) = args.output_dir {
        settings.output_directory = Some(dir);
    }
    if let Some(generator) = args.generator {
        settings.generator = Some(generator);
    }
    if let Some(modeler) = args.modeler {
        settings.modeler = Some(modeler);
    }
    if let Some(namespace) = args.namespace {
        settings.namespace = Some(namespace);
    }
    if let Some(client_name) = args.client_name {
        settings.client_name = Some(client_name);
    }
    if let Some(output_file) = args.output_file {
        settings.output_file_name = Some(output_file);
    }
    if let Some(threshold) = args.payload_flattening_threshold {
        settings.payload_flattening_threshold = Some(threshold);
    }
    if args.add_credentials {
        settings.add_credentials = true;
    }
    if let Some(header) = args.header {
        settings.header_comment = Some(header);
    }
    if args.verbose {
        settings.verbose = true;
    }

    let runner = AutoRestRunner::new();
    let output = runner.generate_with_settings(&args.input, settings).await?;
    println!("{}", output.display());
    Ok(())
}
