//! The `package.json` project manifest.
//!
//! ```json
//! {
//!   "Name": "app",
//!   "Version": "1.0",
//!   "Packages": {
//!     "y": { "Uri": "https://x/y.git", "Private": true }
//!   }
//! }
//! ```
//!
//! Saving only writes this file. Keeping `go.mod` consistent with it is the
//! job of [`crate::project::Context::flush`].

use crate::error::{Error, Result};
use crate::layout::MANIFEST_FILE;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Packages", default, deserialize_with = "null_as_empty")]
    pub dependencies: BTreeMap<String, Dependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(rename = "Uri")]
    pub uri: String,
    #[serde(rename = "Private", default)]
    pub private: bool,
}

// Older manifests carry `"Packages": null` for an empty project.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Dependency>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

impl Manifest {
    pub fn new(name: &str, version: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::EmptyField("name"));
        }
        if version.trim().is_empty() {
            return Err(Error::EmptyField("version"));
        }
        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            dependencies: BTreeMap::new(),
        })
    }

    /// Writes a fresh manifest with no dependencies. Refuses to overwrite.
    pub fn create(project_dir: &Path, name: &str, version: &str) -> Result<Self> {
        let path = manifest_path(project_dir);
        if path.exists() {
            return Err(Error::AlreadyExists(path));
        }
        let manifest = Self::new(name, version)?;
        manifest.save(project_dir)?;
        Ok(manifest)
    }

    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = manifest_path(project_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path));
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        serde_json::from_str(&content).map_err(|source| Error::Malformed { path, source })
    }

    pub fn save(&self, project_dir: &Path) -> Result<()> {
        let path = manifest_path(project_dir);
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| Error::Malformed { path: path.clone(), source })?;
        fs::write(&path, json + "\n").map_err(|e| Error::io(path, e))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Last write wins; callers that must reject duplicates check
    /// [`Manifest::contains`] first.
    pub fn insert(&mut self, name: &str, uri: &str, private: bool) {
        self.dependencies.insert(
            name.to_string(),
            Dependency {
                uri: uri.to_string(),
                private,
            },
        );
    }

    /// Returns whether the dependency was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.dependencies.remove(name).is_some()
    }

    pub fn private_dependencies(&self) -> impl Iterator<Item = (&String, &Dependency)> {
        self.dependencies.iter().filter(|(_, dep)| dep.private)
    }
}
