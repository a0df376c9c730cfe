// src/cli/mod.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docview")]
#[command(about = "Browse a document library from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all documents in the library
    List {
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Show one document in full
    Show {
        id: String,

        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Print the page route table
    Routes,

    /// Resolve a path against the route table
    Resolve { path: String },

    /// Generate shell completion scripts
    Completion {
        #[arg(short, long)]
        shell: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let args = ["docview", "list", "--manifest", "docs.json"];
        let cli = Cli::parse_from(args);
        match cli.command {
            Commands::List { manifest } => {
                assert_eq!(manifest, Some(PathBuf::from("docs.json")));
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_cli_parse_show() {
        let args = ["docview", "--verbose", "show", "42"];
        let cli = Cli::parse_from(args);
        assert!(cli.verbose);
        match cli.command {
            Commands::Show { id, manifest } => {
                assert_eq!(id, "42");
                assert!(manifest.is_none());
            }
            _ => panic!("unexpected command"),
        }
    }
}
