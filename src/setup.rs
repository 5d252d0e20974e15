//! `go-painless setup`: install the running binary under `~/go-painless/bin`.
//!
//! Nested restores prefer the installed copy, so running setup once makes
//! recursive restores independent of where the tool was launched from.

use crate::error::{Error, Result};
use crate::layout::Layout;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Installed,
    AlreadyInstalled,
}

pub fn install(layout: &Layout, current_exe: &Path) -> Result<SetupOutcome> {
    let target = layout.installed_binary();
    if same_file(current_exe, &target) {
        return Ok(SetupOutcome::AlreadyInstalled);
    }

    let bin_dir = layout.bin_dir();
    fs::create_dir_all(&bin_dir).map_err(|e| Error::io(&bin_dir, e))?;
    if target.exists() {
        fs::remove_file(&target).map_err(|e| Error::io(&target, e))?;
    }
    fs::copy(current_exe, &target).map_err(|e| Error::io(&target, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&target)
            .map_err(|e| Error::io(&target, e))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&target, perms).map_err(|e| Error::io(&target, e))?;
    }

    Ok(SetupOutcome::Installed)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
