mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fec_data::FetchConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fec")]
#[command(about = "Fetch itemized campaign contributions from the OpenFEC API")]
struct Cli {
    /// Output format: json or jsonl
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every page of contributions matching the filters
    Fetch(commands::fetch::FetchArgs),
    /// Print how many pages the filters match
    Pages(commands::pages::PagesArgs),
    /// Show how cycle and committee type inputs are interpreted
    Normalize(commands::normalize::NormalizeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fec=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "jsonl" => OutputFormat::JsonLines,
        _ => OutputFormat::Json,
    };

    let config = FetchConfig::from_env();

    match &cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &config, &format).await?,
        Commands::Pages(args) => commands::pages::run(args, &config).await?,
        Commands::Normalize(args) => commands::normalize::run(args, &format),
    }

    Ok(())
}
