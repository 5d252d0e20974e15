//! Restoring every declared dependency of a project.
//!
//! Private dependencies that are managed projects themselves are restored by
//! running `go-painless restore` inside their cache directory as a separate
//! process, so a failure deep in the tree stays scoped to that subtree's run.
//! Recursion ends at cache hits: a nested run never clones a name that is
//! already cached.

use super::fetch::ensure_cached;
use crate::error::Result;
use crate::layout::{MANIFEST_FILE, validate_name};
use crate::manifest::Manifest;
use crate::process::Invocation;
use crate::project::Context;
use crate::toolchain::echo;
use colored::*;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreSummary {
    pub public: Vec<String>,
    pub cloned: Vec<String>,
    pub cached: Vec<String>,
    /// Clones that were restored through a nested run.
    pub nested: Vec<String>,
}

/// Every name is checked before anything runs, so a bad key in a cloned
/// project's manifest fails the whole run instead of reaching the cache.
pub fn restore(ctx: &Context, manifest: &Manifest, update: bool) -> Result<RestoreSummary> {
    for name in manifest.dependencies.keys() {
        validate_name(name)?;
    }

    let go = ctx.go();
    go.mod_init(&manifest.name, &ctx.project_dir)?;

    let mut summary = RestoreSummary::default();
    for (name, dep) in &manifest.dependencies {
        if !dep.private {
            println!("{} Fetching {}...", "📦".blue(), name.bold());
            go.get(&dep.uri, &ctx.project_dir)?;
            summary.public.push(name.clone());
            continue;
        }

        let dir = ctx.layout.package_path(name)?;
        if ensure_cached(ctx, name, &dep.uri, update)? {
            summary.cloned.push(name.clone());
            if restore_nested(ctx, name, &dir)? {
                summary.nested.push(name.clone());
            }
        } else {
            summary.cached.push(name.clone());
        }
        go.tidy(&dir)?;
    }

    Ok(summary)
}

/// Runs a nested restore in `dir` when it carries its own `package.json`,
/// creating its Go module first if needed. Returns whether it ran.
pub fn restore_nested(ctx: &Context, name: &str, dir: &Path) -> Result<bool> {
    if !dir.join(MANIFEST_FILE).exists() {
        return Ok(false);
    }
    println!("   {} Restoring nested project {}", "↳".cyan(), name.bold());
    ctx.go().mod_init(name, dir)?;
    let out = ctx
        .runner
        .run(&Invocation::new(&ctx.self_exe).args(["restore"]).current_dir(dir))?;
    echo(&out);
    Ok(true)
}
