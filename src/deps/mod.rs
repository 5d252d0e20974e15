//! Dependency fetching, caching and restoring.
//!
//! - **Fetching**: `go get` for public modules, Git clones for private ones
//! - **Cache**: one directory per private dependency under `~/go-painless/packages`
//! - **Restore**: bring every declared dependency back, recursing into
//!   dependencies that are managed projects themselves
//!
//! ## Commands
//!
//! - `go-painless add <uri> [--private] [--recursive] [--update]`
//! - `go-painless remove <name>`
//! - `go-painless restore [--tidy] [--update]`
//! - `go-painless cache path|ls|clean`

pub mod cache;
mod fetch;
pub mod git;
mod restore;

pub use fetch::{AddOptions, add_private, add_public, derive_name, remove};
pub use restore::{RestoreSummary, restore, restore_nested};
