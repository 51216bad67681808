//! Examples command implementation

use anyhow::Result;
use clap::{Args, Subcommand};
use redactify_core::ExampleCorpus;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Examples subcommands
#[derive(Debug, Subcommand)]
pub enum ExamplesCommands {
    /// List truncated example labels with their positions
    List(ExamplesArgs),

    /// Print the full example at the given position
    Show {
        /// 0-based example position
        #[arg(value_name = "INDEX")]
        index: usize,

        #[command(flatten)]
        args: ExamplesArgs,
    },
}

/// Shared arguments for examples subcommands
#[derive(Debug, Args)]
pub struct ExamplesArgs {
    /// Example corpus file (default: [examples].file, then example.txt)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ExamplesArgs {
    /// Load the corpus from the resolved file
    fn load_corpus(&self) -> Result<ExampleCorpus> {
        let cli_config = CliConfig::load(self.config.as_deref())?;
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| cli_config.examples.file.clone());
        Ok(ExampleCorpus::load(&file)?)
    }
}

impl ExamplesCommands {
    /// Execute the examples command
    pub fn execute(&self) -> Result<()> {
        match self {
            ExamplesCommands::List(args) => {
                let corpus = args.load_corpus()?;
                for (index, label) in corpus.truncated_labels().iter().enumerate() {
                    println!("{index}: {label}");
                }
            }
            ExamplesCommands::Show { index, args } => {
                let corpus = args.load_corpus()?;
                println!("{}", corpus.full_example(*index)?);
            }
        }
        Ok(())
    }
}
