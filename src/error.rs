//! Error types and helpers for user-friendly error messages
//!
//! Every variant is fatal to a run: the `cxx` executable is missing, one of
//! its invocations exits non-zero, or the examples root cannot be listed.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while driving the example projects
#[derive(Error, Debug)]
pub enum ExamplesError {
    /// Tool/executable not found in PATH
    #[error("{tool} must exist in PATH")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external invocation returned a non-zero exit status
    #[error("{command}")]
    CommandFailed {
        command: String,
        status: Option<i32>,
    },

    /// The examples root could not be listed
    #[error("Cannot read examples directory {}", .path.display())]
    ExamplesDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExamplesError {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a command failure error
    pub fn command_failed(command: impl Into<String>, status: Option<i32>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status,
        }
    }

    /// Report the error the way the command-line contract requires.
    ///
    /// A missing tool goes to stdout as `error: ...`, a failed command goes to
    /// stderr as `ERROR: <command line>`. Hints follow on stderr.
    pub fn report(&self) {
        match self {
            ExamplesError::MissingTool { .. } => {
                println!("error: {}", self);
                self.print_details();
            }
            ExamplesError::CommandFailed { .. } => {
                eprintln!("ERROR: {}", self);
                self.print_details();
            }
            ExamplesError::ExamplesDir { .. } => self.display_with_hints(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);
        self.print_details();
        eprintln!();
    }

    fn print_details(&self) {
        use console::style;

        for (label, text) in self.details() {
            eprintln!("{} {}", style(label).yellow().bold(), text);
        }
    }

    /// Labelled lines shown under the error message
    pub fn details(&self) -> Vec<(&'static str, String)> {
        match self {
            ExamplesError::MissingTool {
                required_for, hint, ..
            } => vec![
                ("REQUIRED FOR:", required_for.clone()),
                ("HINT:", hint.clone()),
            ],
            ExamplesError::CommandFailed { status, .. } => match status {
                Some(code) => vec![("STATUS:", format!("exit status {}", code))],
                None => vec![("STATUS:", "failed to start".to_string())],
            },
            ExamplesError::ExamplesDir { source, .. } => vec![
                ("CAUSE:", source.to_string()),
                ("HINT:", hints::examples_dir().to_string()),
            ],
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing cxx
    pub fn cxx() -> &'static str {
        "Install cxx and make sure the directory holding it is listed in PATH."
    }

    /// Get hint for an unreadable examples root
    pub fn examples_dir() -> &'static str {
        "The examples are expected next to the directory holding this tool.\n\
         Pass --examples-dir <DIR> to point somewhere else."
    }
}
