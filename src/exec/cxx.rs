//! Invocation of the external `cxx` build tool
//!
//! Every call is composed as `<cxx> [-C <dir>] <args...>`, echoed, and run
//! synchronously. A non-zero exit status is turned into
//! [`ExamplesError::CommandFailed`], which the top level treats as fatal.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::subprocess::run_command;
use crate::error::ExamplesError;
use crate::utils::tools::require_tool;

/// Name of the build executable looked up on PATH
pub const CXX: &str = "cxx";

/// Something that can run one `cxx` invocation for a project
pub trait StageRunner {
    /// Run `args` (blank entries dropped) with `directory` as the `-C` target.
    fn run(&mut self, directory: Option<&Path>, args: &[&str]) -> Result<()>;
}

/// A fully composed `cxx` command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    directory: Option<PathBuf>,
    args: Vec<String>,
}

impl CommandLine {
    /// Compose a command line, trimming every argument and dropping blank ones
    pub fn new(program: &Path, directory: Option<&Path>, args: &[&str]) -> Self {
        let args = args
            .iter()
            .map(|arg| arg.trim())
            .filter(|arg| !arg.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            program: program.to_path_buf(),
            directory: directory.map(Path::to_path_buf),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments handed to the program, `-C <dir>` first when set
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        if let Some(dir) = &self.directory {
            argv.push("-C".to_string());
            argv.push(dir.display().to_string());
        }
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.argv() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runner for the `cxx` executable found on PATH
#[derive(Debug, Clone)]
pub struct CxxRunner {
    command: PathBuf,
    dry_run: bool,
    verbose: bool,
}

impl CxxRunner {
    /// Resolve `cxx` on PATH; a missing executable is a setup error
    pub fn locate() -> Result<Self> {
        let info = require_tool(CXX, "building the examples")?;
        tracing::debug!("using {} at {}", info.name, info.path.display());
        Ok(Self::new(info.path))
    }

    /// Runner for an explicit executable path, echoing commands by default
    pub fn new(command: PathBuf) -> Self {
        Self {
            command,
            dry_run: false,
            verbose: true,
        }
    }

    /// Print commands instead of executing them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Echo each command line before running it
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Compose the command line for `args` run in `directory`
    pub fn command_line(&self, directory: Option<&Path>, args: &[&str]) -> CommandLine {
        CommandLine::new(&self.command, directory, args)
    }

    /// Startup smoke test: `cxx version`
    pub fn version(&mut self) -> Result<()> {
        self.run(None, &["version"])
    }
}

impl StageRunner for CxxRunner {
    fn run(&mut self, directory: Option<&Path>, args: &[&str]) -> Result<()> {
        let line = self.command_line(directory, args);

        if self.dry_run || self.verbose {
            println!("{}", line);
        }
        if self.dry_run {
            return Ok(());
        }
        // The child shares our stdout; keep the echo ahead of its output.
        io::stdout().flush()?;

        match run_command(line.program(), &line.argv()) {
            Ok(result) if result.success => Ok(()),
            Ok(result) => {
                Err(ExamplesError::command_failed(line.to_string(), result.exit_code).into())
            }
            Err(err) => {
                tracing::debug!("{:#}", err);
                Err(ExamplesError::command_failed(line.to_string(), None).into())
            }
        }
    }
}
