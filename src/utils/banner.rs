//! Section banners, rendered by figlet when it is installed

use std::io::{self, Write};
use std::path::PathBuf;

use crate::exec::subprocess::run_command;
use crate::utils::tools::check_tool;

/// Something that can print a section header for a stage
pub trait Banner {
    fn msg(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;
}

/// Banner printer backed by `figlet -f small`
#[derive(Debug, Clone, Default)]
pub struct Figlet {
    command: Option<PathBuf>,
}

impl Figlet {
    /// Look figlet up on PATH; a missing figlet only degrades the output
    pub fn locate() -> Self {
        Self {
            command: check_tool("figlet").map(|info| info.path),
        }
    }

    /// Banner printer that always uses the plain-text fallback
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { command: None }
    }
}

impl Banner for Figlet {
    fn msg(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        match &self.command {
            Some(figlet) => {
                writeln!(out)?;
                out.flush()?;
                // Cosmetic only, the exit status is ignored.
                let args = ["-f".to_string(), "small".to_string(), message.to_string()];
                if let Err(err) = run_command(figlet, &args) {
                    tracing::debug!("{:#}", err);
                }
                writeln!(out)
            }
            None => write!(out, "|\n|\n|  {}...\n|\n|\n", message),
        }
    }
}
