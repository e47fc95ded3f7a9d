//! Tool detection on PATH
//!
//! `cxx` is required and its absence is fatal; `figlet` is looked up with
//! [`check_tool`] and only changes how banners look.

use std::path::PathBuf;

use anyhow::Result;
use which::which;

use crate::error::{hints, ExamplesError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
}

/// Check if a tool exists on PATH and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    match which(tool_name) {
        Ok(path) => {
            tracing::debug!("found {} at {}", tool_name, path.display());
            Some(ToolInfo {
                name: tool_name.to_string(),
                path,
            })
        }
        Err(err) => {
            tracing::debug!("{} not found in PATH: {}", tool_name, err);
            None
        }
    }
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => {
            let hint = get_tool_hint(tool_name);
            Err(ExamplesError::missing_tool(tool_name, required_for, hint).into())
        }
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "cxx" => hints::cxx(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONEXISTENT: &str = "definitely-not-a-real-tool-7f3a9";

    #[test]
    fn test_check_missing_tool() {
        assert!(check_tool(NONEXISTENT).is_none());
    }

    #[test]
    fn test_required_missing_tool_is_missing_tool_error() {
        let err = require_tool(NONEXISTENT, "building examples").unwrap_err();
        match err.downcast_ref::<ExamplesError>() {
            Some(ExamplesError::MissingTool {
                tool, required_for, hint,
            }) => {
                assert_eq!(tool, NONEXISTENT);
                assert_eq!(required_for, "building examples");
                assert!(hint.contains("PATH"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_cxx_gets_its_own_hint() {
        assert_eq!(get_tool_hint("cxx"), hints::cxx());
    }
}
