//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use redactify_core::{CommandEngine, Config, Redactor, Session};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{self, FileReader};
use crate::output::{self, HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Text to process
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language name or code (e.g. "Italian" or "it")
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Redaction policy (annotate/redact/synthetic/placeholder, case-insensitive)
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// External engine executable
    #[arg(long, value_name = "CMD", env = "REDACTIFY_ENGINE")]
    pub engine_cmd: Option<PathBuf>,

    /// Configuration file handed through to the engine
    #[arg(long, value_name = "FILE")]
    pub engine_config: Option<PathBuf>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Transformed text with literal entity markers
    Text,
    /// Transformed text with markers highlighted as HTML
    Html,
    /// JSON object with both renditions
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        let cli_config = CliConfig::load(self.config.as_deref())?;
        cli_config.cache.ensure();

        log::info!("starting text processing");
        log::debug!("arguments: {:?}", self);

        let text = self.read_text()?;
        let redactor = self.build_redactor(&cli_config)?;
        let session = Session::with_language(redactor.config().language());

        let result = redactor
            .process_default(&session, &text)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        let writer = output::writer_for(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        formatter.write_result(&result)?;
        formatter.finish()?;

        Ok(())
    }

    /// Resolve the input text from --text, --input, or stdin
    fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.input {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                FileReader::read_text(path)
            }
            None => input::read_stdin(),
        }
    }

    /// Assemble the engine adapter and request configuration
    ///
    /// Command-line arguments win over the CLI config file, which wins over
    /// built-in defaults.
    fn build_redactor(&self, cli_config: &CliConfig) -> Result<Redactor> {
        let program = self
            .engine_cmd
            .clone()
            .or_else(|| cli_config.engine.command.clone())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no engine command configured (use --engine-cmd, REDACTIFY_ENGINE, \
                     or [engine].command)"
                        .to_string(),
                )
            })?;

        let selection = self
            .language
            .as_deref()
            .unwrap_or(&cli_config.processing.default_language);
        let policy = self
            .policy
            .as_deref()
            .unwrap_or(&cli_config.processing.default_policy);

        let mut builder = Config::builder().language(selection).default_policy(policy);
        if let Some(path) = self
            .engine_config
            .clone()
            .or_else(|| cli_config.engine.config.clone())
        {
            builder = builder.engine_config(path);
        }
        let config = builder
            .build()
            .with_context(|| format!("invalid processing selection ({selection}, {policy})"))?;

        let engine = Arc::new(CommandEngine::new(program));
        Ok(Redactor::with_config(engine, config))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
