//! The per-user package cache (`~/go-painless/packages`).
//!
//! A subdirectory named after a dependency means "already fetched". Entries
//! are only removed by a forced update or a full clean.

use crate::error::{Error, Result};
use crate::layout::Layout;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Whether `name` has a cache entry. Invalid names never do.
pub fn is_cached(layout: &Layout, name: &str) -> bool {
    layout.package_path(name).is_ok_and(|dir| dir.is_dir())
}

/// Names of cached packages, sorted.
pub fn list(layout: &Layout) -> Result<Vec<String>> {
    let dir = layout.packages_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Deletes one directory tree. Git marks object files read-only, which
/// blocks removal on Windows, so a denied first attempt clears the bits and
/// retries.
pub fn remove_tree(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            make_writable(path);
            fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(path: &Path) {
    for entry in WalkDir::new(path).into_iter().flatten() {
        if let Ok(meta) = entry.metadata() {
            let mut perms = meta.permissions();
            if perms.readonly() {
                perms.set_readonly(false);
                let _ = fs::set_permissions(entry.path(), perms);
            }
        }
    }
}

/// Removes every cached package. Returns whether anything was there.
pub fn clean(layout: &Layout) -> Result<bool> {
    let dir = layout.packages_dir();
    if !dir.exists() {
        return Ok(false);
    }
    remove_tree(&dir)?;
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_only_directories() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::with_root(temp.path());
        fs::create_dir_all(layout.package_path("json").unwrap()).unwrap();
        fs::create_dir_all(layout.package_path("auth").unwrap()).unwrap();
        fs::write(layout.packages_dir().join("stray.txt"), "x").unwrap();

        assert_eq!(list(&layout).unwrap(), vec!["auth", "json"]);
        assert!(is_cached(&layout, "json"));
        assert!(!is_cached(&layout, "stray.txt"));
        assert!(!is_cached(&layout, ".."));
    }

    #[test]
    fn test_list_without_cache_dir() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::with_root(temp.path().join("missing"));
        assert!(list(&layout).unwrap().is_empty());
    }

    #[test]
    fn test_remove_tree_with_readonly_files() {
        let temp = tempfile::tempdir().unwrap();
        let pkg = temp.path().join("pkg");
        fs::create_dir_all(pkg.join(".git").join("objects")).unwrap();
        let object = pkg.join(".git").join("objects").join("ab");
        fs::write(&object, "blob").unwrap();
        let mut perms = fs::metadata(&object).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&object, perms).unwrap();

        remove_tree(&pkg).unwrap();
        assert!(!pkg.exists());
    }

    #[test]
    fn test_clean_recreates_empty_root() {
        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::with_root(temp.path());
        assert!(!clean(&layout).unwrap());

        fs::create_dir_all(layout.package_path("json").unwrap()).unwrap();
        assert!(clean(&layout).unwrap());
        assert!(layout.packages_dir().exists());
        assert!(list(&layout).unwrap().is_empty());
    }
}
