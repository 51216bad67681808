//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [engine].command at your PII engine executable");
        println!("2. Process some text:");
        println!(
            "   redactify process --text \"...\" -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# ReDactify CLI configuration

[processing]
# Default language, by name ("Italian") or code ("it")
default_language = "en"
# Default policy: annotate, redact, synthetic, or placeholder
default_policy = "annotate"

[engine]
# External PII engine executable, invoked as:
#   <command> --lang <code> --policy <policy> [--config <file>]
# with the input text on stdin and marked-up text expected on stdout.
# command = "pii-engine"

# Configuration file handed through to the engine, e.g. to disable
# optional detection plugins.
# config = "config.json"

[examples]
# Newline-separated example texts, one example per line
file = "example.txt"

[cache]
# Scratch directory the engine may use for model and plugin caches
dir = "app/cache"
"#
        .to_string()
    }
}
