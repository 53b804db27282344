//! Directory reading and mutation operations.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**. Use [`crate::nav::search::sort_entries`]
/// to apply sorting after reading. Entries whose metadata cannot be read are
/// silently skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use duofm_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}

/// Reads the immediate child **directories** of `path`.
///
/// Used by the folder tree, which never displays files. Same error
/// contract as [`read_directory`].
pub fn list_subdirectories(path: &Path) -> CoreResult<Vec<FileEntry>> {
    let mut entries = read_directory(path)?;
    entries.retain(|e| e.is_dir());
    Ok(entries)
}

/// Creates a new directory named `name` inside `parent` and returns its path.
///
/// # Errors
///
/// - [`CoreError::InvalidName`] if `name` is not a valid file name.
/// - [`CoreError::AlreadyExists`] if an entry with that name exists.
/// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] on filesystem failure.
pub fn create_directory(parent: &Path, name: &str) -> CoreResult<PathBuf> {
    if !is_valid_entry_name(name) {
        return Err(CoreError::InvalidName(name.to_string()));
    }

    let path = parent.join(name);
    if path.exists() {
        return Err(CoreError::AlreadyExists(path));
    }

    std::fs::create_dir(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.clone())
        } else {
            CoreError::Io(e)
        }
    })?;

    Ok(path)
}

/// Deletes a file or directory (recursively).
///
/// Symbolic links are removed without following them.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::Io`] for any I/O failure during deletion.
pub fn delete_entry(path: &Path) -> CoreResult<()> {
    // Use symlink_metadata: does NOT follow symlinks, avoids TOCTOU
    let meta = std::fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::NotFound(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    if meta.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        // Handles both regular files and symlinks
        std::fs::remove_file(path)?;
    }

    Ok(())
}

/// Renames a file or directory within the same parent directory.
///
/// The `new_name` must be a valid file name (no path separators, not empty,
/// not `.` or `..`). Returns the new path.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::AlreadyExists`] if the new name is already taken.
/// - [`CoreError::Io`] for any I/O failure.
pub fn rename_entry(path: &Path, new_name: &str) -> CoreResult<PathBuf> {
    // Use symlink_metadata to avoid TOCTOU and handle symlinks correctly
    if std::fs::symlink_metadata(path).is_err() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    if !is_valid_entry_name(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
    let new_path = parent.join(new_name);

    if new_path != path && new_path.exists() {
        return Err(CoreError::AlreadyExists(new_path));
    }

    std::fs::rename(path, &new_path)?;

    Ok(new_path)
}

/// Copies a file or directory recursively to the destination path.
///
/// If `src` is a file, it is copied directly. If `src` is a directory,
/// it is copied recursively including all contents. Symlinks are copied
/// as links, never followed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `src` does not exist.
/// - [`CoreError::AlreadyExists`] if `dest` exists.
/// - [`CoreError::Io`] for any I/O failure during copy.
pub fn copy_entry(src: &Path, dest: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(src).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::NotFound(src.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    if dest.exists() {
        return Err(CoreError::AlreadyExists(dest.to_path_buf()));
    }

    if meta.is_dir() {
        copy_dir_recursive(src, dest, 0)?;
    } else {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if meta.is_symlink() {
            copy_symlink(src, dest)?;
        } else {
            std::fs::copy(src, dest)?;
        }
    }

    Ok(())
}

/// Maximum recursion depth for copy_dir_recursive to prevent symlink loops.
const MAX_COPY_DEPTH: usize = 64;

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::Io(std::io::Error::other(format!(
            "maximum recursion depth ({MAX_COPY_DEPTH}) exceeded during copy"
        ))));
    }

    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let target = dest.join(entry.file_name());

        // Use entry.file_type() which does NOT follow symlinks
        let ft = entry.file_type()?;

        if ft.is_symlink() {
            copy_symlink(&entry_path, &target)?;
        } else if ft.is_dir() {
            copy_dir_recursive(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target)?;
        }
    }

    Ok(())
}

fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    let link_target = std::fs::read_link(src)?;
    #[cfg(unix)]
    std::os::unix::fs::symlink(&link_target, dest)?;
    #[cfg(not(unix))]
    {
        let _ = link_target;
        std::fs::copy(src, dest)?;
    }
    Ok(())
}

/// Returns `true` if `name` is usable as a file or directory name.
pub fn is_valid_entry_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
