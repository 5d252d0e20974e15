//! On-disk locations used by the tool.
//!
//! Everything per-user lives under `~/go-painless`:
//!
//! ```text
//! ~/go-painless/
//! ├── bin/go-painless      (installed by `go-painless setup`)
//! └── packages/<name>/     (cloned private dependencies)
//! ```

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Custom manifest, kept in the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// Host build manifest owned by the Go toolchain.
pub const BUILD_FILE: &str = "go.mod";
pub const SUM_FILE: &str = "go.sum";

const TOOL_DIR: &str = "go-painless";

#[cfg(windows)]
pub const BINARY_NAME: &str = "go-painless.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "go-painless";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Layout rooted at `<home>/go-painless`.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::NotFound(PathBuf::from("home directory"))
        })?;
        Ok(Self::with_root(home.join(TOOL_DIR)))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.root.join("packages")
    }

    /// Cache entry for `name`. Fails unless `name` is a single plain path
    /// component, so the entry always sits directly under the cache root.
    pub fn package_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.packages_dir().join(name))
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn installed_binary(&self) -> PathBuf {
        self.bin_dir().join(BINARY_NAME)
    }

    /// Executable used for nested `restore` runs: the installed copy when
    /// present, otherwise whatever is running now.
    pub fn self_exe(&self) -> Result<PathBuf> {
        let installed = self.installed_binary();
        if installed.is_file() {
            return Ok(installed);
        }
        std::env::current_exe().map_err(|e| Error::io("current executable", e))
    }
}

/// Dependency names double as cache directory names.
pub fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || name.contains(['/', '\\']) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
