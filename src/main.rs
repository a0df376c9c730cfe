use clap::Parser;
use docview::cli::{Cli, Commands};
use docview::commands::{completion, docs, routes};
use docview::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(&AppConfig::default_path()?)?,
    };

    match cli.command {
        Commands::List { manifest } => {
            docs::cmd_list_docs(&config, manifest)?;
        }
        Commands::Show { id, manifest } => {
            docs::cmd_show_doc(&config, &id, manifest)?;
        }
        Commands::Routes => {
            routes::cmd_show_routes()?;
        }
        Commands::Resolve { path } => {
            routes::cmd_resolve_route(&path)?;
        }
        Commands::Completion { shell } => {
            completion::cmd_generate_completion(shell)?;
        }
    }

    Ok(())
}
