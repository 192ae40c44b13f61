use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Result, SubtransError};
use crate::language::LanguagePair;

/// External tool invocation: binary, arguments and a description for errors
#[derive(Debug, Clone)]
pub struct ToolCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl ToolCommand {
    /// Create a new tool command
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }

    /// Render as a single shell command line, every word double-quoted.
    ///
    /// Only `"` is escaped: `$`, backticks and backslashes keep their shell
    /// meaning inside the quotes.
    pub fn shell_line(&self) -> String {
        std::iter::once(&self.binary_path)
            .chain(self.args.iter())
            .map(|word| format!("\"{}\"", escape_double_quotes(word)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Wrap the command so it runs through `sh -c`
    pub fn into_shell(self) -> Self {
        let line = self.shell_line();
        Self {
            binary_path: "sh".to_string(),
            args: vec!["-c".to_string(), line],
            description: self.description,
        }
    }

    /// Run the command and return its trimmed standard output.
    ///
    /// A spawn failure, a non-zero exit status or any output on standard
    /// error is an error.
    pub async fn execute(&self) -> Result<String> {
        debug!("Executing: {} {:?}", self.binary_path, self.args);

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                SubtransError::Translation(format!("Failed to execute {}: {}", self.binary_path, e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(SubtransError::Translation(format!(
                "{} failed ({}): {}",
                self.description,
                output.status,
                stderr.trim()
            )));
        }

        if !output.stderr.is_empty() {
            return Err(SubtransError::Translation(format!(
                "{} reported: {}",
                self.description,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Builder for translate-shell invocations
#[derive(Debug, Clone)]
pub struct TransCommandBuilder {
    binary_path: String,
    extra_args: Vec<String>,
}

impl TransCommandBuilder {
    pub fn new<S: Into<String>>(binary_path: S, extra_args: Vec<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            extra_args,
        }
    }

    /// `<binary> [extra args] -brief -no-warn -from <from> -to <to> <text>`
    pub fn translate(&self, text: &str, pair: &LanguagePair) -> ToolCommand {
        ToolCommand::new(&self.binary_path, format!("Translation {}", pair))
            .args(self.extra_args.iter().cloned())
            .arg("-brief")
            .arg("-no-warn")
            .arg("-from")
            .arg(&pair.from)
            .arg("-to")
            .arg(&pair.to)
            .arg(text)
    }
}

/// Escape embedded double quotes for use inside a double-quoted shell word
pub fn escape_double_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
