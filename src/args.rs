//! Root path resolution.
//!
//! Expands `~` shorthand and validates that the root argument names an
//! existing directory before any scanning starts.

use anyhow::Context;
use std::path::PathBuf;

/// Expands a leading `~` to the invoking user's home directory.
/// Paths without the shorthand are returned unchanged.
fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Resolves the root directory argument to an absolute canonical path.
///
/// Fails if the expanded path does not exist or is not a directory; the
/// error message carries the original input string verbatim.
pub fn parse_root(input: &str) -> anyhow::Result<PathBuf> {
    let expanded = expand_home(input);
    if !expanded.is_dir() {
        anyhow::bail!("Given path '{}' is not an existing directory.", input);
    }
    expanded
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize path '{}'", input))
}
