//! `go.mod` directive synchronization.
//!
//! Each private dependency is wired into the Go module as a pair of lines:
//!
//! ```text
//! replace y => "/home/me/go-painless/packages/y"
//! require y v1.0.0
//! ```
//!
//! [`sync_directives`] drops every existing `replace ... => ...` line, along
//! with the next line that mentions the replaced name (normally its
//! `require`), keeps everything else in order and appends one fresh pair per
//! private dependency. Applying it to its own output changes nothing.
//!
//! Matching is by substring, not by parsing `go.mod`: any line mentioning a
//! pending name is dropped, not only the paired `require`.

use crate::error::{Error, Result};
use crate::layout::BUILD_FILE;
use std::fs;
use std::path::{Path, PathBuf};

/// Version declared for every locally replaced module.
pub const SYNTHETIC_VERSION: &str = "v1.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub path: PathBuf,
}

impl Directive {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    fn replace_line(&self) -> String {
        let path = self.path.display().to_string().replace('\\', "\\\\");
        format!("replace {} => \"{}\"", self.name, path)
    }

    fn require_line(&self) -> String {
        format!("require {} {}", self.name, SYNTHETIC_VERSION)
    }
}

/// Returns the replaced module name for a `replace <name> => <target>` line,
/// `None` for any other line.
fn replaced_name(line: &str) -> Result<Option<&str>> {
    let trimmed = line.strip_prefix(' ').unwrap_or(line);
    if !trimmed.starts_with("replace") || !trimmed.contains("=>") {
        return Ok(None);
    }
    let malformed = || Error::MalformedBuildFile {
        line: line.to_string(),
    };

    let parts: Vec<&str> = trimmed.split("=>").collect();
    if parts.len() != 2 || parts[1].trim().is_empty() {
        return Err(malformed());
    }
    let mut tokens = parts[0].split_whitespace();
    if tokens.next() != Some("replace") {
        // `replacements => x` and the like are not directives.
        return Ok(None);
    }
    tokens.next().map(Some).ok_or_else(malformed)
}

/// Rewrites `existing` so its managed directives match `private`.
pub fn sync_directives(existing: &str, private: &[Directive]) -> Result<String> {
    let mut pending: Vec<String> = Vec::new();
    let mut output = String::with_capacity(existing.len());

    for line in existing.lines() {
        if let Some(name) = replaced_name(line)? {
            pending.push(name.to_string());
            continue;
        }
        if let Some(idx) = pending.iter().position(|name| line.contains(name.as_str())) {
            pending.remove(idx);
            continue;
        }
        output.push_str(line);
        output.push('\n');
    }

    for directive in private {
        output.push_str(&directive.replace_line());
        output.push('\n');
        output.push_str(&directive.require_line());
        output.push('\n');
    }

    Ok(output)
}

/// Applies [`sync_directives`] to `<project_dir>/go.mod` in place.
pub fn sync_build_file(project_dir: &Path, private: &[Directive]) -> Result<()> {
    let path = project_dir.join(BUILD_FILE);
    let existing = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let updated = sync_directives(&existing, private)?;
    fs::write(&path, updated).map_err(|e| Error::io(&path, e))
}
