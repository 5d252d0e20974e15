//! The Go toolchain, as seen by the engine.
//!
//! Thin wrappers over `go mod init`, `go get`, `go mod tidy` and `go build`.
//! Captured output of successful commands is echoed to the terminal.

use crate::error::Result;
use crate::layout::BUILD_FILE;
use crate::process::{CommandOutput, Invocation, ProcessRunner};
use colored::*;
use std::path::Path;

const GO: &str = "go";

pub struct GoToolchain<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> GoToolchain<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// `go mod init <module>` in `dir`, unless `dir` already has a `go.mod`.
    /// Returns whether a new module was created.
    pub fn mod_init(&self, module: &str, dir: &Path) -> Result<bool> {
        if dir.join(BUILD_FILE).exists() {
            return Ok(false);
        }
        self.run(Invocation::new(GO).args(["mod", "init", module]).current_dir(dir))?;
        Ok(true)
    }

    pub fn get(&self, uri: &str, dir: &Path) -> Result<()> {
        self.run(Invocation::new(GO).args(["get", uri]).current_dir(dir))
    }

    pub fn tidy(&self, dir: &Path) -> Result<()> {
        self.run(Invocation::new(GO).args(["mod", "tidy"]).current_dir(dir))
    }

    pub fn build(&self, dir: &Path, goos: &str, goarch: &str, output: &str, target: &str) -> Result<()> {
        self.run(
            Invocation::new(GO)
                .args(["build", "-o", output, target])
                .current_dir(dir)
                .env("GOOS", goos)
                .env("GOARCH", goarch),
        )
    }

    /// Forwards arbitrary arguments to `go`.
    pub fn passthrough(&self, dir: &Path, args: &[String]) -> Result<()> {
        self.run(Invocation::new(GO).args(args.iter().cloned()).current_dir(dir))
    }

    fn run(&self, invocation: Invocation) -> Result<()> {
        let out = self.runner.run(&invocation)?;
        echo(&out);
        Ok(())
    }
}

pub(crate) fn echo(out: &CommandOutput) {
    let stderr = out.stderr.trim_end();
    if !stderr.is_empty() {
        println!("{}", stderr.yellow());
    }
    let stdout = out.stdout.trim_end();
    if !stdout.is_empty() {
        println!("{}", stdout.green());
    }
}
