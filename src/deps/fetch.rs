//! Adding and removing dependencies.
//!
//! Public dependencies go through `go get`. Private ones are cloned into the
//! package cache under their name and wired into `go.mod` on the next flush.

use super::{cache, restore};
use crate::error::{Error, Result};
use crate::layout::validate_name;
use crate::manifest::{Dependency, Manifest};
use crate::project::Context;
use colored::*;
use std::fs;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Bootstrap and restore the clone when it is a managed project itself.
    pub recursive: bool,
    /// Discard an existing cache entry and clone again.
    pub update: bool,
}

/// Derives a dependency name from a URL or module path: the last path
/// segment without a trailing `.git`.
pub fn derive_name(uri: &str) -> Option<String> {
    let last = uri.trim_end_matches('/').rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then(|| name.to_string())
}

pub fn add_public(ctx: &Context, manifest: &mut Manifest, name: &str, uri: &str) -> Result<()> {
    validate_name(name)?;
    if manifest.contains(name) {
        return Err(Error::DuplicateName(name.to_string()));
    }
    ctx.go().get(uri, &ctx.project_dir)?;
    manifest.insert(name, uri, false);
    Ok(())
}

pub fn add_private(
    ctx: &Context,
    manifest: &mut Manifest,
    name: &str,
    uri: &str,
    options: AddOptions,
) -> Result<Dependency> {
    let dir = ctx.layout.package_path(name)?;
    if manifest.contains(name) {
        return Err(Error::DuplicateName(name.to_string()));
    }

    let cloned = ensure_cached(ctx, name, uri, options.update)?;
    if cloned && options.recursive {
        ctx.go().mod_init(name, &dir)?;
        restore::restore_nested(ctx, name, &dir)?;
    }

    manifest.insert(name, uri, true);
    ctx.go().tidy(&dir)?;

    Ok(Dependency {
        uri: uri.to_string(),
        private: true,
    })
}

/// Returns whether the dependency was declared. The cache entry is left
/// behind.
pub fn remove(manifest: &mut Manifest, name: &str) -> bool {
    manifest.remove(name)
}

/// Makes sure `<cache>/<name>` holds a clone of `uri`. With `force`, an
/// existing entry is deleted first. A non-directory at the entry's path is
/// an error. Returns whether a clone happened.
pub(crate) fn ensure_cached(ctx: &Context, name: &str, uri: &str, force: bool) -> Result<bool> {
    let dir = ctx.layout.package_path(name)?;
    if cache::is_cached(&ctx.layout, name) {
        if !force {
            println!("   {} Using cached: {}", "⚡".green(), name);
            return Ok(false);
        }
        println!("   {} Deleting {}", "🗑️".red(), dir.display());
        cache::remove_tree(&dir)?;
    } else if dir.exists() {
        // Something other than a clone occupies the entry.
        return Err(Error::AlreadyExists(dir));
    }

    let packages = ctx.layout.packages_dir();
    fs::create_dir_all(&packages).map_err(|e| Error::io(&packages, e))?;
    ctx.vcs.clone_repo(name, uri, &dir)?;
    Ok(true)
}
