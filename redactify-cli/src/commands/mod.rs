//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use redactify_core::{Language, Policy};

pub mod examples;
pub mod generate_config;
pub mod highlight;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transform text through the external PII engine
    Process(process::ProcessArgs),

    /// Render already-marked engine output as highlighted HTML
    Highlight(highlight::HighlightArgs),

    /// Inspect the example corpus
    Examples {
        #[command(subcommand)]
        subcommand: examples::ExamplesCommands,
    },

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Highlight(args) => args.execute(),
            Commands::Examples { subcommand } => subcommand.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List redaction policies
    Policies,

    /// List output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for language in Language::ALL {
                    println!("{}  {}", language.code(), language.name());
                }
            }
            ListCommands::Policies => {
                for policy in Policy::ALL {
                    println!("{policy}");
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("html");
                println!("json");
            }
        }
        Ok(())
    }
}
