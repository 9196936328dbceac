//! Install-tree packaging.
//!
//! After the external install step, the package tree still carries
//! build-system metadata the binary package must not ship. The prune list
//! is fixed; it does not depend on the option set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Paths removed from every installed package tree, relative to the
/// install prefix.
pub const PRUNE_PATHS: &[&str] = &[
    "bin/nc-config",
    "lib/cmake",
    "lib/pkgconfig",
    "lib/libnetcdf.settings",
    "share",
];

/// Remove the fixed set of build-system metadata paths from the tree.
///
/// Missing entries are skipped; returns the paths actually removed.
pub fn prune_package_tree(prefix: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for rel in PRUNE_PATHS {
        let path = prefix.join(rel);
        if !path.exists() {
            continue;
        }

        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("failed to remove `{}`", path.display()))?;
        } else {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove `{}`", path.display()))?;
        }

        tracing::debug!("pruned {}", path.display());
        removed.push(path);
    }

    Ok(removed)
}

/// Collect the names of libraries produced under the install prefix.
///
/// Scans `lib` and `lib64`, normalizing platform naming conventions:
/// `libnetcdf.so.19` and `netcdf.lib` both collect as `netcdf`.
pub fn collect_libs(prefix: &Path) -> Vec<String> {
    let mut libs = BTreeSet::new();

    for subdir in ["lib", "lib64"] {
        let lib_dir = prefix.join(subdir);
        if !lib_dir.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&lib_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if !has_library_extension(path) {
                continue;
            }
            if let Some(name) = lib_name(path) {
                libs.insert(name);
            }
        }
    }

    libs.into_iter().collect()
}

fn has_library_extension(path: &Path) -> bool {
    // versioned shared objects (libnetcdf.so.19) hide the extension behind
    // the version suffix, so look at the full file name
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    file_name.ends_with(".a")
        || file_name.ends_with(".lib")
        || file_name.ends_with(".dylib")
        || file_name.ends_with(".dll")
        || file_name.contains(".so")
}

/// Extract the library name from a file path.
///
/// Strips the Unix `lib` prefix and any extension or version suffix:
/// `libnetcdf.so.19.1.0` → `netcdf`, `netcdf.lib` → `netcdf`.
fn lib_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();

    let name = stem.strip_prefix("lib").unwrap_or(&stem);
    let name = name.split('.').next().unwrap_or(name);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_prune_removes_fixed_paths() {
        let tmp = TempDir::new().unwrap();
        let prefix = tmp.path();

        touch(&prefix.join("bin/nc-config"));
        touch(&prefix.join("bin/ncdump"));
        touch(&prefix.join("lib/libnetcdf.a"));
        touch(&prefix.join("lib/libnetcdf.settings"));
        touch(&prefix.join("lib/cmake/netCDF/netCDFConfig.cmake"));
        touch(&prefix.join("lib/pkgconfig/netcdf.pc"));
        touch(&prefix.join("share/man/man1/ncdump.1"));

        let removed = prune_package_tree(prefix).unwrap();
        assert_eq!(removed.len(), 5);

        assert!(!prefix.join("bin/nc-config").exists());
        assert!(!prefix.join("lib/cmake").exists());
        assert!(!prefix.join("lib/pkgconfig").exists());
        assert!(!prefix.join("lib/libnetcdf.settings").exists());
        assert!(!prefix.join("share").exists());

        // everything else survives
        assert!(prefix.join("bin/ncdump").exists());
        assert!(prefix.join("lib/libnetcdf.a").exists());
    }

    #[test]
    fn test_prune_tolerates_missing_paths() {
        let tmp = TempDir::new().unwrap();
        let removed = prune_package_tree(tmp.path()).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_collect_libs_unix() {
        let tmp = TempDir::new().unwrap();
        let prefix = tmp.path();
        touch(&prefix.join("lib/libnetcdf.a"));
        touch(&prefix.join("lib/libnetcdf.so"));
        touch(&prefix.join("lib/libnetcdf.so.19"));
        touch(&prefix.join("lib/libnetcdf.settings"));

        assert_eq!(collect_libs(prefix), vec!["netcdf"]);
    }

    #[test]
    fn test_collect_libs_windows() {
        let tmp = TempDir::new().unwrap();
        let prefix = tmp.path();
        touch(&prefix.join("lib/netcdf.lib"));

        assert_eq!(collect_libs(prefix), vec!["netcdf"]);
    }

    #[test]
    fn test_collect_libs_empty_prefix() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_libs(tmp.path()).is_empty());
    }
}
