//! Per-invocation context and project-level file operations.
//!
//! A [`Context`] bundles what every operation needs: where the project is,
//! where the package cache is, and how to reach Git and Go. The [`Manifest`]
//! itself is passed alongside it and written back with [`Context::flush`].

use crate::deps::git::Vcs;
use crate::error::{Error, Result};
use crate::gomod::{self, Directive};
use crate::layout::{BUILD_FILE, Layout, SUM_FILE};
use crate::manifest::Manifest;
use crate::process::ProcessRunner;
use crate::toolchain::GoToolchain;
use std::fs;
use std::path::PathBuf;

pub struct Context<'a> {
    pub project_dir: PathBuf,
    pub layout: Layout,
    pub runner: &'a dyn ProcessRunner,
    pub vcs: &'a dyn Vcs,
    /// Executable invoked for nested `restore` runs.
    pub self_exe: PathBuf,
}

impl<'a> Context<'a> {
    pub fn go(&self) -> GoToolchain<'a> {
        GoToolchain::new(self.runner)
    }

    /// Creates `package.json` and the Go module for a new project.
    pub fn init(&self, name: &str, version: &str) -> Result<Manifest> {
        let manifest = Manifest::create(&self.project_dir, name, version)?;
        self.go().mod_init(&manifest.name, &self.project_dir)?;
        Ok(manifest)
    }

    pub fn load(&self) -> Result<Manifest> {
        Manifest::load(&self.project_dir)
    }

    /// Replace/require pairs for the manifest's private dependencies.
    pub fn directives(&self, manifest: &Manifest) -> Result<Vec<Directive>> {
        manifest
            .private_dependencies()
            .map(|(name, _)| Ok(Directive::new(name.as_str(), self.layout.package_path(name)?)))
            .collect()
    }

    /// Writes `package.json`, then brings `go.mod` in line with it. The two
    /// writes are not atomic together; a failure in the second leaves the
    /// first in place.
    pub fn flush(&self, manifest: &Manifest) -> Result<()> {
        manifest.save(&self.project_dir)?;
        gomod::sync_build_file(&self.project_dir, &self.directives(manifest)?)
    }

    /// Deletes `go.mod` and `go.sum`. Returns the names that were removed.
    pub fn clear_build_files(&self) -> Result<Vec<&'static str>> {
        let mut removed = Vec::new();
        for file in [BUILD_FILE, SUM_FILE] {
            let path = self.project_dir.join(file);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
                removed.push(file);
            }
        }
        Ok(removed)
    }
}
