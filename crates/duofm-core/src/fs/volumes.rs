//! Filesystem root enumeration for the folder tree.

use std::path::PathBuf;

/// A top-level location shown as a root of the folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Display label (e.g. `/`, `~`, or the mount-point name).
    pub name: String,
    /// Absolute path of the root.
    pub path: PathBuf,
}

/// Enumerates the roots to display in the folder tree.
///
/// On Unix this is the filesystem root, the home directory, and any mount
/// points found under the conventional media directories. On Windows it is
/// the drive letters that exist. Duplicate paths are removed while keeping
/// the first occurrence, so the order is stable.
#[cfg(unix)]
pub fn list_roots() -> Vec<Volume> {
    let mut roots = vec![Volume {
        name: "/".to_string(),
        path: PathBuf::from("/"),
    }];

    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        if home.is_dir() && home != PathBuf::from("/") {
            roots.push(Volume {
                name: "~".to_string(),
                path: home.clone(),
            });
        }

        // Removable media usually mounts under /media/<user>/<label>
        if let Some(user) = home.file_name() {
            push_mounts(&PathBuf::from("/media").join(user), &mut roots);
            push_mounts(&PathBuf::from("/run/media").join(user), &mut roots);
        }
    }

    for base in ["/mnt", "/Volumes"] {
        push_mounts(&PathBuf::from(base), &mut roots);
    }

    dedup_by_path(roots)
}

#[cfg(windows)]
pub fn list_roots() -> Vec<Volume> {
    let mut roots = Vec::new();
    for letter in 'A'..='Z' {
        let path = PathBuf::from(format!("{letter}:\\"));
        if path.is_dir() {
            roots.push(Volume {
                name: format!("{letter}:"),
                path,
            });
        }
    }
    roots
}

#[cfg(unix)]
fn push_mounts(base: &std::path::Path, out: &mut Vec<Volume>) {
    let Ok(read_dir) = std::fs::read_dir(base) else {
        return;
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        out.push(Volume { name, path });
    }
}

#[cfg(unix)]
fn dedup_by_path(roots: Vec<Volume>) -> Vec<Volume> {
    let mut seen = std::collections::HashSet::new();
    roots
        .into_iter()
        .filter(|v| {
            let canonical = v.path.canonicalize().unwrap_or_else(|_| v.path.clone());
            seen.insert(canonical)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn list_roots_contains_filesystem_root() {
        let roots = list_roots();
        assert!(!roots.is_empty());
        assert_eq!(roots[0].name, "/");
        assert_eq!(roots[0].path, PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn list_roots_has_no_duplicate_paths() {
        let roots = list_roots();
        let mut canonical: Vec<PathBuf> = roots
            .iter()
            .map(|v| v.path.canonicalize().unwrap_or_else(|_| v.path.clone()))
            .collect();
        canonical.sort();
        let before = canonical.len();
        canonical.dedup();
        assert_eq!(before, canonical.len());
    }

    #[cfg(unix)]
    #[test]
    fn list_roots_paths_exist() {
        for root in list_roots() {
            assert!(root.path.is_dir(), "{} should exist", root.path.display());
        }
    }
}
