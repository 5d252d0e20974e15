//! Test doubles for the process and VCS boundaries.

use crate::deps::git::Vcs;
use crate::error::{Error, Result};
use crate::layout::{BUILD_FILE, Layout};
use crate::process::{CommandOutput, Invocation, ProcessRunner};
use crate::project::Context;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records every invocation. `go mod init <m>` writes `module <m>` into the
/// working directory, everything else just succeeds unless told to fail.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failing: RefCell<HashSet<String>>,
}

impl FakeRunner {
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Number of calls whose command line is `prefix` or starts with
    /// `prefix` followed by more arguments.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| matches_prefix(&inv.display(), prefix))
            .count()
    }

    /// Makes any command line matching `prefix` exit non-zero.
    pub fn fail_on(&self, prefix: &str) {
        self.failing.borrow_mut().insert(prefix.to_string());
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let line = invocation.display();

        if self.failing.borrow().iter().any(|p| matches_prefix(&line, p)) {
            return Err(Error::Process {
                command: line,
                status: "exit status: 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }

        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        if let ["mod", "init", module] = args.as_slice() {
            let dir = invocation.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
            fs::write(dir.join(BUILD_FILE), format!("module {}\n", module))
                .map_err(|e| Error::io(&dir, e))?;
        }
        Ok(CommandOutput::default())
    }
}

fn matches_prefix(line: &str, prefix: &str) -> bool {
    line == prefix || line.starts_with(&format!("{prefix} "))
}

/// Clones create the destination directory and write any files seeded for
/// the URL.
#[derive(Default)]
pub struct FakeVcs {
    clones: RefCell<Vec<String>>,
    seeded: RefCell<HashMap<String, Vec<(String, String)>>>,
    failing: RefCell<HashSet<String>>,
}

impl FakeVcs {
    pub fn seed(&self, url: &str, file: &str, content: &str) {
        self.seeded
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push((file.to_string(), content.to_string()));
    }

    pub fn fail_on(&self, url: &str) {
        self.failing.borrow_mut().insert(url.to_string());
    }

    /// URLs cloned so far, in order.
    pub fn clones(&self) -> Vec<String> {
        self.clones.borrow().clone()
    }
}

impl Vcs for FakeVcs {
    fn clone_repo(&self, name: &str, url: &str, dest: &Path) -> Result<()> {
        self.clones.borrow_mut().push(url.to_string());
        if self.failing.borrow().contains(url) {
            return Err(Error::Fetch {
                name: name.to_string(),
                reason: "simulated failure".to_string(),
            });
        }
        fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;
        if let Some(files) = self.seeded.borrow().get(url) {
            for (file, content) in files {
                fs::write(dest.join(file), content).map_err(|e| Error::io(dest, e))?;
            }
        }
        Ok(())
    }
}

/// A temporary project directory plus a temporary per-user root.
pub struct Sandbox {
    temp: TempDir,
    pub runner: FakeRunner,
    pub vcs: FakeVcs,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(temp.path().join("project")).expect("project dir");
        Self {
            temp,
            runner: FakeRunner::default(),
            vcs: FakeVcs::default(),
        }
    }

    pub fn project(&self) -> PathBuf {
        self.temp.path().join("project")
    }

    pub fn layout(&self) -> Layout {
        Layout::with_root(self.temp.path().join("home").join("go-painless"))
    }

    pub fn self_exe(&self) -> PathBuf {
        self.layout().installed_binary()
    }

    pub fn context(&self) -> Context<'_> {
        Context {
            project_dir: self.project(),
            layout: self.layout(),
            runner: &self.runner,
            vcs: &self.vcs,
            self_exe: self.self_exe(),
        }
    }
}
