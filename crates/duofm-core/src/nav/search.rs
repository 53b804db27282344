//! Sorting, hidden-file filtering, and name search for file entries.

use crate::fs::entry::FileEntry;

/// The field by which entries are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort alphabetically by name (case-insensitive).
    Name,
    /// Sort by file size in bytes.
    Size,
    /// Sort by creation time.
    Created,
    /// Sort by last-modified time.
    Modified,
}

impl SortField {
    /// Human-readable label for the sort popup.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Created => "Created",
            Self::Modified => "Modified",
        }
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest / earliest / A–Z first.
    Ascending,
    /// Largest / latest / Z–A first.
    Descending,
}

/// Sorts a list of file entries by the given field and direction.
///
/// When `dirs_first` is `true`, directories always appear before files
/// regardless of the sort field. Returns a **new** sorted `Vec<FileEntry>`
/// — the input slice is never mutated.
pub fn sort_entries(
    entries: &[FileEntry],
    field: SortField,
    direction: SortDirection,
    dirs_first: bool,
) -> Vec<FileEntry> {
    let mut sorted: Vec<FileEntry> = entries.to_vec();

    sorted.sort_by(|a, b| {
        if dirs_first {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp != std::cmp::Ordering::Equal {
                return dir_cmp;
            }
        }

        let ord = compare_by_field(a, b, field);

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    sorted
}

fn compare_by_field(a: &FileEntry, b: &FileEntry, field: SortField) -> std::cmp::Ordering {
    match field {
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortField::Size => a.size().cmp(&b.size()),
        SortField::Created => a.created().cmp(&b.created()),
        SortField::Modified => a.modified().cmp(&b.modified()),
    }
}

/// Filters out hidden entries when `show_hidden` is `false`.
///
/// When `show_hidden` is `true` all entries are returned unchanged.
pub fn filter_hidden(entries: &[FileEntry], show_hidden: bool) -> Vec<FileEntry> {
    if show_hidden {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}

/// Returns the index of the first entry whose name contains `query`,
/// compared case-insensitively. An empty query never matches.
pub fn find_first_match(entries: &[FileEntry], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .position(|e| e.name().to_lowercase().contains(&needle))
}

/// Returns the indices of every entry whose name contains `query`
/// (case-insensitive), in listing order. Empty for an empty query.
pub fn matching_indices(entries: &[FileEntry], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.name().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_entries(tmp: &TempDir) -> Vec<FileEntry> {
        fs::write(tmp.path().join("banana.txt"), "12345").unwrap();
        fs::write(tmp.path().join("Apple.rs"), "ab").unwrap();
        fs::write(tmp.path().join("cherry.md"), "abcdefghij").unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();

        let entries = crate::fs::ops::read_directory(tmp.path()).unwrap();
        sort_entries(&entries, SortField::Name, SortDirection::Ascending, false)
    }

    #[test]
    fn sort_by_name_ascending_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["Apple.rs", "banana.txt", "cherry.md", "docs", "src"]
        );
    }

    #[test]
    fn sort_by_name_descending() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let sorted = sort_entries(&entries, SortField::Name, SortDirection::Descending, false);

        let names: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["src", "docs", "cherry.md", "banana.txt", "Apple.rs"]
        );
    }

    #[test]
    fn sort_dirs_first() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let sorted = sort_entries(&entries, SortField::Name, SortDirection::Ascending, true);

        let names: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
        assert_eq!(names[0], "docs");
        assert_eq!(names[1], "src");
        assert!(sorted[2..].iter().all(|e| !e.is_dir()));
    }

    #[test]
    fn sort_by_size_ascending() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let sorted = sort_entries(&entries, SortField::Size, SortDirection::Ascending, false);

        let files: Vec<_> = sorted.iter().filter(|e| !e.is_dir()).collect();
        assert!(files[0].size() <= files[1].size());
        assert!(files[1].size() <= files[2].size());
    }

    #[test]
    fn sort_by_modified_newest_last_when_ascending() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("old.txt"), "").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(50));
        fs::write(tmp.path().join("new.txt"), "").unwrap();

        let entries = crate::fs::ops::read_directory(tmp.path()).unwrap();
        let sorted = sort_entries(&entries, SortField::Modified, SortDirection::Ascending, false);

        assert_eq!(sorted[0].name(), "old.txt");
        assert_eq!(sorted[1].name(), "new.txt");
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);
        let before: Vec<String> = entries.iter().map(|e| e.name().to_string()).collect();

        let _ = sort_entries(&entries, SortField::Size, SortDirection::Descending, true);

        let after: Vec<String> = entries.iter().map(|e| e.name().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_hidden_removes_dotfiles() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();
        let entries = crate::fs::ops::read_directory(tmp.path()).unwrap();

        let filtered = filter_hidden(&entries, false);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "visible.txt");
    }

    #[test]
    fn filter_hidden_keeps_all_when_shown() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();
        let entries = crate::fs::ops::read_directory(tmp.path()).unwrap();

        let filtered = filter_hidden(&entries, true);

        assert_eq!(filtered.len(), 2);
    }

    // --- search tests ---

    #[test]
    fn find_first_match_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let idx = find_first_match(&entries, "APPLE").unwrap();
        assert_eq!(entries[idx].name(), "Apple.rs");

        let idx = find_first_match(&entries, "An").unwrap();
        assert_eq!(entries[idx].name(), "banana.txt");
    }

    #[test]
    fn find_first_match_returns_first_in_listing_order() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        // "c" appears in "cherry.md", "docs", and "src"; cherry.md sorts first
        let idx = find_first_match(&entries, "c").unwrap();
        assert_eq!(entries[idx].name(), "cherry.md");
    }

    #[test]
    fn find_first_match_none_for_no_match() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        assert!(find_first_match(&entries, "zzz_not_there").is_none());
    }

    #[test]
    fn find_first_match_none_for_empty_query() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        assert!(find_first_match(&entries, "").is_none());
    }

    #[test]
    fn matching_indices_returns_all_matches_in_order() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let matches = matching_indices(&entries, "d");
        let names: Vec<&str> = matches.iter().map(|&i| entries[i].name()).collect();
        assert_eq!(names, vec!["cherry.md", "docs"]);
    }

    #[test]
    fn matching_indices_empty_query_matches_nothing() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        assert!(matching_indices(&entries, "").is_empty());
    }
}
