//! Repository cloning for private dependencies.

use crate::error::{Error, Result};
use colored::*;
use git2::Repository;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub trait Vcs {
    /// Clones `url` into `dest`, which must not exist yet.
    fn clone_repo(&self, name: &str, url: &str, dest: &Path) -> Result<()>;
}

/// libgit2-backed cloning, with a spinner while the transfer runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Vcs;

impl Vcs for Git2Vcs {
    fn clone_repo(&self, name: &str, url: &str, dest: &Path) -> Result<()> {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""]));
        }
        pb.set_message(format!("Cloning {}...", name));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        match Repository::clone(url, dest) {
            Ok(_) => {
                pb.finish_with_message(format!("{} Cloned {}", "✓".green(), name));
                Ok(())
            }
            Err(e) => {
                pb.finish_with_message(format!("{} Failed {}", "x".red(), name));
                Err(Error::Fetch {
                    name: name.to_string(),
                    reason: e.message().to_string(),
                })
            }
        }
    }
}
