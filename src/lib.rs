//! # go-painless - Private dependencies for Go modules
//!
//! go-painless keeps a `package.json` manifest next to `go.mod`. Public
//! dependencies are fetched with `go get`; private ones are cloned from Git
//! into a per-user cache and wired into `go.mod` with `replace`/`require`
//! pairs that are regenerated on every write.
//!
//! ## Quick Start
//!
//! ```bash
//! go-painless init app
//! go-painless add https://git.example.com/team/auth.git --private
//! go-painless restore --tidy
//! ```
//!
//! ## Module Organization
//!
//! - [`manifest`] - The `package.json` record
//! - [`gomod`] - Keeping `go.mod` directives in sync with the manifest
//! - [`deps`] - Fetching, caching and restoring dependencies
//! - [`project`] - Per-invocation context and flushing
//! - [`toolchain`] / [`process`] - Running Go and other commands

pub mod deps;

/// Error kinds shared by every operation.
pub mod error;

/// `go.mod` replace/require synchronization.
pub mod gomod;

/// Per-user and per-project paths.
pub mod layout;

pub mod manifest;

/// External command execution.
pub mod process;

pub mod project;

/// Self-install into the per-user bin directory.
pub mod setup;

/// Go toolchain commands.
pub mod toolchain;

/// Terminal UI utilities (tables).
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
