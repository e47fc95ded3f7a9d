//! Path utilities for locating the examples and addressing them from the cwd

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the directory holding the example projects
pub const EXAMPLES_DIR_NAME: &str = "examples";

/// Default examples root: `<parent of the executable's directory>/examples`
pub fn default_examples_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(examples_dir_for(&exe))
}

/// Examples root for a tool installed at `exe`
pub fn examples_dir_for(exe: &Path) -> PathBuf {
    let this_dir = exe.parent().unwrap_or(Path::new("."));
    let root = this_dir.parent().unwrap_or(this_dir);
    root.join(EXAMPLES_DIR_NAME)
}

/// Express `path` relative to the current working directory
pub fn relative_to_cwd(path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(relative_to(path, &cwd))
}

/// Express `path` relative to `base`, keeping `path` when no relative form exists
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(base.join(path), base).unwrap_or_else(|| path.to_path_buf())
}
