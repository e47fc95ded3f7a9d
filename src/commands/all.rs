//! Run one or more `cxx` stages over every example project
//!
//! Stages run strictly in order: a stage finishes over all projects before
//! the next one starts, and the first failing invocation aborts the run.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::error::ExamplesError;
use crate::exec::cxx::{CxxRunner, StageRunner};
use crate::utils::banner::{Banner, Figlet};
use crate::utils::paths::{default_examples_dir, relative_to_cwd};
use crate::utils::terminal::{print_success, print_warning, write_separator};

/// Stages run when no command is given
pub const DEFAULT_STAGES: &[&str] = &["fastclean", "build"];

/// Projects skipped when no skip-list is given
pub const DEFAULT_SKIPLIST: &[&str] = &["boson"];

/// Separator between chained stages, as in `fastclean:build`
pub const STAGE_DELIMITER: char = ':';

/// The one project that needs an extra flag, and only on one host
pub const SPECIAL_PROJECT: &str = "sfml";
pub const SPECIAL_SYSTEM: &str = "Darwin";
pub const SPECIAL_FLAG: &str = "clang=1";

/// Clean, build, run or rebuild every example project with cxx
#[derive(Args, Debug)]
pub struct AllCommand {
    /// Stage to run, or several joined with ':' (e.g. fastclean:build)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Project directory names to skip [default: boson]
    #[arg(value_name = "SKIP")]
    pub skip: Vec<String>,

    /// Directory holding the example projects
    /// [default: <parent of this tool's directory>/examples]
    #[arg(long, value_name = "DIR")]
    pub examples_dir: Option<PathBuf>,

    /// Print the cxx commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not echo cxx commands before running them
    #[arg(short, long)]
    pub quiet: bool,
}

/// One stage token handed to cxx
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Build,
    Clean,
    FastClean,
    Rebuild,
    Run,
    /// Any other token cxx accepts; passed through untouched
    Other(String),
}

impl Stage {
    pub fn parse(token: &str) -> Self {
        match token {
            "build" => Stage::Build,
            "clean" => Stage::Clean,
            "fastclean" => Stage::FastClean,
            "rebuild" => Stage::Rebuild,
            "run" => Stage::Run,
            other => Stage::Other(other.to_string()),
        }
    }

    /// Split a `:`-joined command into its ordered stages
    pub fn parse_sequence(command: &str) -> Vec<Stage> {
        command.split(STAGE_DELIMITER).map(Stage::parse).collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Stage::Build => "build",
            Stage::Clean => "clean",
            Stage::FastClean => "fastclean",
            Stage::Rebuild => "rebuild",
            Stage::Run => "run",
            Stage::Other(token) => token,
        }
    }

    /// Banner shown before the stage; unknown stages get none
    pub fn banner_message(&self) -> Option<&'static str> {
        match self {
            Stage::Build => Some("Building all examples"),
            Stage::Clean | Stage::FastClean => Some("Cleaning all examples"),
            Stage::Rebuild => Some("Rebuilding all examples"),
            Stage::Run => Some("Running all examples"),
            Stage::Other(_) => None,
        }
    }

    /// Cleaning stays quiet about skipped projects
    pub fn announces_skips(&self) -> bool {
        !matches!(self, Stage::Clean | Stage::FastClean)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project names excluded from the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList(BTreeSet<String>);

impl SkipList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Resolved stages and skip-list for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub stages: Vec<Stage>,
    pub skiplist: SkipList,
}

impl Invocation {
    /// Apply the defaults: a missing or empty command means
    /// `fastclean:build`, no skip names means `boson`.
    pub fn resolve(command: Option<&str>, skip: &[String]) -> Self {
        let stages = match command {
            Some(command) if !command.is_empty() => Stage::parse_sequence(command),
            _ => DEFAULT_STAGES.iter().map(|token| Stage::parse(token)).collect(),
        };

        let skiplist = if skip.is_empty() {
            SkipList::new(DEFAULT_SKIPLIST.iter().copied())
        } else {
            SkipList::new(skip.iter().cloned())
        };

        Self { stages, skiplist }
    }
}

/// Host operating system, named the way `uname -s` names it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSystem(String);

impl HostSystem {
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    pub fn from_target_os(os: &str) -> Self {
        let name = match os {
            "macos" => "Darwin".to_string(),
            "linux" => "Linux".to_string(),
            "windows" => "Windows".to_string(),
            "freebsd" => "FreeBSD".to_string(),
            "netbsd" => "NetBSD".to_string(),
            "openbsd" => "OpenBSD".to_string(),
            other => {
                let mut chars = other.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        };
        Self(name)
    }

    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extra cxx argument for a project: `clang=1` for sfml on macOS, else empty
pub fn extra_flag(project: &str, host: &HostSystem) -> &'static str {
    if project == SPECIAL_PROJECT && host.as_str() == SPECIAL_SYSTEM {
        SPECIAL_FLAG
    } else {
        ""
    }
}

/// One example project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Immediate subdirectories of `root`, in the order the filesystem lists them
pub fn project_dirs(root: &Path) -> Result<Vec<Project>> {
    let entries = fs::read_dir(root).map_err(|source| ExamplesError::ExamplesDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", root.display()))?;
        let path = entry.path();
        if path.is_dir() {
            projects.push(Project::new(path));
        }
    }
    Ok(projects)
}

/// Run a single stage over all projects
pub fn run_all(
    runner: &mut dyn StageRunner,
    banner: &dyn Banner,
    out: &mut dyn Write,
    stage: &Stage,
    projects: &[Project],
    skiplist: &SkipList,
    host: &HostSystem,
) -> Result<()> {
    if let Some(message) = stage.banner_message() {
        banner.msg(out, message)?;
    }

    for project in projects {
        write_separator(out, &project.name)?;

        if skiplist.contains(&project.name) {
            if stage.announces_skips() {
                writeln!(out, "Skipping {} at {}", project.name, stage)?;
                out.flush()?;
            }
            continue;
        }

        let extraflag = extra_flag(&project.name, host);
        let reldir = relative_to_cwd(&project.path)?;
        runner.run(Some(&reldir), &[stage.as_str(), extraflag])?;
        out.flush()?;
    }

    Ok(())
}

/// Run every stage in order; the first error stops the whole sequence
pub fn run_stages(
    runner: &mut dyn StageRunner,
    banner: &dyn Banner,
    out: &mut dyn Write,
    invocation: &Invocation,
    projects: &[Project],
    host: &HostSystem,
) -> Result<()> {
    for stage in &invocation.stages {
        tracing::debug!("running stage {} over {} projects", stage, projects.len());
        run_all(runner, banner, out, stage, projects, &invocation.skiplist, host)?;
    }
    Ok(())
}

impl AllCommand {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let invocation = Invocation::resolve(self.command.as_deref(), &self.skip);
        tracing::debug!(
            "stages: [{}], skipping: [{}]",
            invocation
                .stages
                .iter()
                .map(Stage::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            invocation.skiplist.names().collect::<Vec<_>>().join(", ")
        );

        let examples_dir = match self.examples_dir {
            Some(dir) => dir,
            None => default_examples_dir()?,
        };

        let mut runner = CxxRunner::locate()?
            .dry_run(self.dry_run)
            .verbose(!self.quiet);
        if self.dry_run {
            print_warning("dry run, no cxx command will be executed");
        }
        runner.version()?;

        let banner = Figlet::locate();
        let projects = project_dirs(&examples_dir)?;
        tracing::debug!(
            "found {} projects in {}",
            projects.len(),
            examples_dir.display()
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_stages(
            &mut runner,
            &banner,
            &mut out,
            &invocation,
            &projects,
            &HostSystem::current(),
        )?;
        drop(out);

        print_success("Done.");
        Ok(())
    }
}
