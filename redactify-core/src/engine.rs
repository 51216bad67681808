//! External engine boundary
//!
//! The actual PII detection and transformation is performed by an external
//! component. [`PiiEngine`] is the seam; [`CommandEngine`] adapts a
//! configured executable to it, handing over the language, policy, and
//! engine configuration file on the command line and the text on stdin.

use crate::error::{Error, Result};
use crate::language::Language;
use crate::policy::Policy;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// One engine invocation, built fresh per call and never retained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineRequest<'a> {
    text: &'a str,
    language: Language,
    policy: Policy,
    config: Option<&'a Path>,
}

impl<'a> EngineRequest<'a> {
    /// Assemble a request
    pub fn new(
        text: &'a str,
        language: Language,
        policy: Policy,
        config: Option<&'a Path>,
    ) -> Self {
        Self {
            text,
            language,
            policy,
            config,
        }
    }

    /// The raw input text
    pub fn text(&self) -> &str {
        self.text
    }

    /// Detection language for this call
    pub fn language(&self) -> Language {
        self.language
    }

    /// Default policy for this call
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Engine configuration file, if any
    pub fn config(&self) -> Option<&Path> {
        self.config
    }
}

/// Boundary to the external PII engine
///
/// Invocation is synchronous and blocking; there is no retry, timeout, or
/// cancellation on this path.
pub trait PiiEngine: Send + Sync {
    /// Transform a text buffer, returning marked-up plain text
    fn transform(&self, request: &EngineRequest<'_>) -> Result<String>;
}

/// Engine adapter that shells out to a configured executable
///
/// The command is invoked as
/// `<program> --lang <code> --policy <policy> [--config <path>]` with the
/// input text on stdin and the marked-up result expected on stdout.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: PathBuf,
}

impl CommandEngine {
    /// Create an adapter for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured executable
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl PiiEngine for CommandEngine {
    fn transform(&self, request: &EngineRequest<'_>) -> Result<String> {
        if let Some(config) = request.config() {
            if !config.exists() {
                return Err(Error::ResourceNotFound {
                    path: config.display().to_string(),
                });
            }
        }

        let mut command = Command::new(&self.program);
        command
            .arg("--lang")
            .arg(request.language().code())
            .arg("--policy")
            .arg(request.policy().as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(config) = request.config() {
            command.arg("--config").arg(config);
        }

        let mut child = command.spawn().map_err(|e| {
            Error::Engine(format!(
                "failed to launch {}: {e}",
                self.program.display()
            ))
        })?;

        // Feed stdin from a separate thread while the parent drains stdout
        // and stderr, so input larger than the pipe buffer cannot deadlock
        // against an engine that streams its output.
        let writer = child.stdin.take().map(|mut stdin| {
            let text = request.text().to_owned();
            std::thread::spawn(move || match stdin.write_all(text.as_bytes()) {
                // An engine may legitimately exit before consuming all of its
                // input; the exit status and stderr decide the outcome then.
                Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Engine(format!("failed to read engine output: {e}")))?;

        let written = writer.map(|writer| {
            writer
                .join()
                .map_err(|_| Error::Engine("engine stdin writer panicked".to_string()))
        });

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Engine(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if let Some(written) = written {
            written?.map_err(|e| Error::Engine(format!("failed to write engine stdin: {e}")))?;
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Engine(format!("engine produced invalid UTF-8: {e}")))
    }
}
