//! Zip archive creation and extraction.
//!
//! Archives are plain deflate-compressed zip files readable by any standard
//! tool. Creation walks the directory tree synchronously; extraction relies
//! on the `zip` crate's sanitized [`ZipArchive::extract`], which rejects
//! entry names that would escape the destination directory.

use std::fs::File;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{CoreError, CoreResult};

/// Maximum directory depth archived before giving up, to stop symlink loops.
const MAX_ZIP_DEPTH: usize = 64;

/// Returns `true` if the path has a `.zip` extension (case-insensitive).
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// Archives the directory tree rooted at `src_dir` into `dest_zip`.
///
/// Entry names are relative to the directory's parent, so extracting the
/// archive recreates a single top-level folder named after `src_dir`.
/// Directories are stored as explicit entries so empty folders survive a
/// round trip. Symbolic links are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `src_dir` does not exist.
/// - [`CoreError::NotADirectory`] if `src_dir` is not a directory.
/// - [`CoreError::AlreadyExists`] if `dest_zip` exists.
/// - [`CoreError::Archive`] if the zip writer fails.
/// - [`CoreError::Io`] for any other I/O failure.
pub fn zip_directory(src_dir: &Path, dest_zip: &Path) -> CoreResult<()> {
    if !src_dir.exists() {
        return Err(CoreError::NotFound(src_dir.to_path_buf()));
    }
    if !src_dir.is_dir() {
        return Err(CoreError::NotADirectory(src_dir.to_path_buf()));
    }
    if dest_zip.exists() {
        return Err(CoreError::AlreadyExists(dest_zip.to_path_buf()));
    }

    let root_name = src_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CoreError::InvalidName("directory has no name".to_string()))?;

    let file = File::create(dest_zip)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let result = add_dir_recursive(&mut writer, src_dir, &root_name, options, 0);
    if let Err(e) = result {
        // Don't leave a half-written archive behind
        drop(writer);
        let _ = std::fs::remove_file(dest_zip);
        return Err(e);
    }

    writer
        .finish()
        .map_err(|e| CoreError::Archive(e.to_string()))?;
    Ok(())
}

fn add_dir_recursive(
    writer: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
    options: SimpleFileOptions,
    depth: usize,
) -> CoreResult<()> {
    if depth > MAX_ZIP_DEPTH {
        return Err(CoreError::Archive(format!(
            "maximum directory depth ({MAX_ZIP_DEPTH}) exceeded"
        )));
    }

    writer
        .add_directory(format!("{prefix}/"), options)
        .map_err(|e| CoreError::Archive(e.to_string()))?;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let ft = entry.file_type()?;
        if ft.is_symlink() {
            tracing::debug!("skipping symlink in archive: {}", entry.path().display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_name = format!("{prefix}/{name}");

        if ft.is_dir() {
            add_dir_recursive(writer, &entry.path(), &entry_name, options, depth + 1)?;
        } else {
            writer
                .start_file(entry_name, options)
                .map_err(|e| CoreError::Archive(e.to_string()))?;
            let mut src = File::open(entry.path())?;
            std::io::copy(&mut src, writer)?;
        }
    }

    Ok(())
}

/// Extracts `archive` into `dest_dir`, creating the destination if missing.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `archive` does not exist.
/// - [`CoreError::NotAnArchive`] if it is not a readable zip file.
/// - [`CoreError::Archive`] if extraction fails partway.
/// - [`CoreError::Io`] for any other I/O failure.
pub fn extract_archive(archive: &Path, dest_dir: &Path) -> CoreResult<()> {
    if !archive.exists() {
        return Err(CoreError::NotFound(archive.to_path_buf()));
    }
    if !is_archive(archive) || !archive.is_file() {
        return Err(CoreError::NotAnArchive(archive.to_path_buf()));
    }

    let file = File::open(archive)?;
    let mut zip =
        ZipArchive::new(file).map_err(|_| CoreError::NotAnArchive(archive.to_path_buf()))?;

    std::fs::create_dir_all(dest_dir)?;
    zip.extract(dest_dir)
        .map_err(|e| CoreError::Archive(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn build_sample_tree(root: &Path) {
        fs::create_dir(root.join("project")).unwrap();
        fs::write(root.join("project").join("readme.md"), "# hello").unwrap();
        fs::create_dir(root.join("project").join("src")).unwrap();
        fs::write(root.join("project").join("src").join("main.rs"), "fn main() {}").unwrap();
        fs::create_dir(root.join("project").join("empty")).unwrap();
    }

    #[test]
    fn is_archive_matches_zip_extension() {
        assert!(is_archive(Path::new("/a/b.zip")));
        assert!(is_archive(Path::new("/a/B.ZIP")));
        assert!(!is_archive(Path::new("/a/b.tar.gz")));
        assert!(!is_archive(Path::new("/a/zip")));
    }

    #[test]
    fn zip_then_extract_round_trips() {
        let tmp = TempDir::new().unwrap();
        build_sample_tree(tmp.path());

        let archive = tmp.path().join("project.zip");
        zip_directory(&tmp.path().join("project"), &archive).unwrap();
        assert!(archive.is_file());

        let out = tmp.path().join("out");
        extract_archive(&archive, &out).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("project").join("readme.md")).unwrap(),
            "# hello"
        );
        assert_eq!(
            fs::read_to_string(out.join("project").join("src").join("main.rs")).unwrap(),
            "fn main() {}"
        );
        assert!(out.join("project").join("empty").is_dir());
    }

    #[test]
    fn zip_directory_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = zip_directory(&tmp.path().join("missing"), &tmp.path().join("out.zip"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn zip_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let result = zip_directory(&file, &tmp.path().join("out.zip"));
        assert!(matches!(result.unwrap_err(), CoreError::NotADirectory(_)));
    }

    #[test]
    fn zip_directory_existing_dest_refused() {
        let tmp = TempDir::new().unwrap();
        build_sample_tree(tmp.path());
        let archive = tmp.path().join("project.zip");
        fs::write(&archive, "placeholder").unwrap();

        let result = zip_directory(&tmp.path().join("project"), &archive);

        assert!(matches!(result.unwrap_err(), CoreError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&archive).unwrap(), "placeholder");
    }

    #[test]
    fn zip_directory_empty_folder() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("vacant")).unwrap();

        let archive = tmp.path().join("vacant.zip");
        zip_directory(&tmp.path().join("vacant"), &archive).unwrap();

        let out = tmp.path().join("out");
        extract_archive(&archive, &out).unwrap();
        assert!(out.join("vacant").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn zip_directory_skips_symlinks() {
        let tmp = TempDir::new().unwrap();
        build_sample_tree(tmp.path());
        std::os::unix::fs::symlink(
            tmp.path().join("project").join("readme.md"),
            tmp.path().join("project").join("link.md"),
        )
        .unwrap();

        let archive = tmp.path().join("project.zip");
        zip_directory(&tmp.path().join("project"), &archive).unwrap();

        let out = tmp.path().join("out");
        extract_archive(&archive, &out).unwrap();
        assert!(!out.join("project").join("link.md").exists());
        assert!(out.join("project").join("readme.md").exists());
    }

    #[test]
    fn extract_archive_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = extract_archive(&tmp.path().join("missing.zip"), &tmp.path().join("out"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn extract_archive_wrong_extension_returns_not_an_archive() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.txt");
        fs::write(&file, "not a zip").unwrap();

        let result = extract_archive(&file, &tmp.path().join("out"));
        assert!(matches!(result.unwrap_err(), CoreError::NotAnArchive(_)));
    }

    #[test]
    fn extract_archive_garbage_zip_returns_not_an_archive() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bogus.zip");
        fs::write(&file, "this is not a zip archive").unwrap();

        let result = extract_archive(&file, &tmp.path().join("out"));
        assert!(matches!(result.unwrap_err(), CoreError::NotAnArchive(_)));
    }

    #[test]
    fn extract_archive_creates_destination() {
        let tmp = TempDir::new().unwrap();
        build_sample_tree(tmp.path());
        let archive = tmp.path().join("project.zip");
        zip_directory(&tmp.path().join("project"), &archive).unwrap();

        let out = tmp.path().join("deeply").join("nested").join("out");
        extract_archive(&archive, &out).unwrap();

        assert!(out.join("project").join("readme.md").is_file());
    }

    #[test]
    fn extract_into_directory_with_existing_content() {
        let tmp = TempDir::new().unwrap();
        build_sample_tree(tmp.path());
        let archive = tmp.path().join("project.zip");
        zip_directory(&tmp.path().join("project"), &archive).unwrap();

        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("existing.txt"), "keep me").unwrap();

        extract_archive(&archive, &out).unwrap();

        assert_eq!(fs::read_to_string(out.join("existing.txt")).unwrap(), "keep me");
        assert!(out.join("project").is_dir());
    }
}
