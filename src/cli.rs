//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::all::AllCommand;

/// cxx-examples - run cxx over every example project
///
/// The first argument is a cxx stage (build, clean, fastclean, rebuild, run or
/// any other stage cxx accepts), or several joined with ':'. The remaining
/// arguments name projects to skip.
#[derive(Parser, Debug)]
#[command(name = "cxx-examples")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub all: AllCommand,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        self.all.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["cxx-examples"]).unwrap();
        assert!(cli.all.command.is_none());
        assert!(cli.all.skip.is_empty());
        assert!(!cli.all.dry_run);
    }

    #[test]
    fn test_command_and_skiplist() {
        let cli = Cli::try_parse_from(["cxx-examples", "fastclean:build", "boson", "qt"]).unwrap();
        assert_eq!(cli.all.command.as_deref(), Some("fastclean:build"));
        assert_eq!(cli.all.skip, vec!["boson", "qt"]);
    }

    #[test]
    fn test_options_mix_with_positionals() {
        let cli = Cli::try_parse_from([
            "cxx-examples",
            "--examples-dir",
            "/tmp/examples",
            "-n",
            "run",
            "sfml",
        ])
        .unwrap();
        assert_eq!(cli.all.examples_dir.as_deref(), Some(std::path::Path::new("/tmp/examples")));
        assert!(cli.all.dry_run);
        assert_eq!(cli.all.command.as_deref(), Some("run"));
        assert_eq!(cli.all.skip, vec!["sfml"]);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
