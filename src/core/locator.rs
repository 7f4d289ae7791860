// src/core/locator.rs

use crate::constants::JAVA_EXTENSION;
use std::path::{Component, Path};
use thiserror::Error;
use walkdir::WalkDir;

/// Failure to search the tree, as opposed to not finding the file.
#[derive(Error, Debug)]
pub enum LocateError {
    /// A directory under the root (or the root itself) could not be read.
    #[error("Could not traverse '{root}': {source}")]
    Traversal {
        /// The root of the search.
        root: String,
        #[source]
        /// The entry that failed and why.
        source: walkdir::Error,
    },
}

/// Searches `root` for a file named `name`, or `name` followed by `.java`.
///
/// The walk is depth-first, with the entries of each directory visited in file name
/// order, and stops at the first match. Symlinks are not followed, but a symlink is
/// matched by its own name like any other non-directory entry.
///
/// # Returns
/// The path of the match relative to `root`, with `/` separators, or `None` when
/// nothing matches. An empty `name` is never searched for.
///
/// # Errors
/// Returns `LocateError::Traversal` if a directory cannot be read.
pub fn locate(root: &Path, name: &str) -> Result<Option<String>, LocateError> {
    if name.is_empty() {
        return Ok(None);
    }

    let name_with_extension = format!("{}{}", name, JAVA_EXTENSION);
    log::debug!(
        "Searching '{}' for '{}' or '{}'",
        root.display(),
        name,
        name_with_extension
    );

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| LocateError::Traversal {
            root: root.display().to_string(),
            source,
        })?;

        // Symlinks are reported as such (not followed), so a linked file still matches.
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        if file_name == name || file_name == name_with_extension.as_str() {
            log::trace!("Match: {}", entry.path().display());
            return Ok(Some(to_relative_slash_path(root, entry.path())));
        }
    }

    Ok(None)
}

/// Renders `path` relative to `root`, joining the components with `/` on every platform.
fn to_relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_bare_class_name_finds_java_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "bpm/engine/src/test/java/org/acme/Foo.java");

        let found = locate(dir.path(), "Foo").unwrap();

        assert_eq!(
            found.as_deref(),
            Some("bpm/engine/src/test/java/org/acme/Foo.java")
        );
    }

    #[test]
    fn test_name_with_extension_matches_verbatim() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "module/build.gradle.kts");

        let found = locate(dir.path(), "build.gradle.kts").unwrap();

        assert_eq!(found.as_deref(), Some("module/build.gradle.kts"));
    }

    #[test]
    fn test_missing_name_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/Bar.java");

        assert!(locate(dir.path(), "Foo").unwrap().is_none());
    }

    #[test]
    fn test_empty_name_skips_the_search() {
        // A root that does not exist would fail the walk if it were attempted.
        let missing = Path::new("definitely/not/a/real/root");
        assert!(locate(missing, "").unwrap().is_none());
    }

    #[test]
    fn test_directories_never_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Foo")).unwrap();

        assert!(locate(dir.path(), "Foo").unwrap().is_none());
    }

    #[test]
    fn test_partial_path_does_not_match() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/b/Foo.java");

        assert!(locate(dir.path(), "b/Foo.java").unwrap().is_none());
    }

    #[test]
    fn test_first_match_in_walk_order_wins() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/Foo.java");
        touch(dir.path(), "a/Foo.java");

        assert_eq!(locate(dir.path(), "Foo").unwrap().as_deref(), Some("a/Foo.java"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_class_file_is_found() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "shared/FooIT.java");
        let link_dir = dir.path().join("mod/src/test/java/x");
        fs::create_dir_all(&link_dir).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("shared/FooIT.java"),
            link_dir.join("FooIT.java"),
        )
        .unwrap();

        // `mod/` sorts before `shared/`, so the link is reached first.
        let found = locate(dir.path(), "FooIT").unwrap();

        assert_eq!(found.as_deref(), Some("mod/src/test/java/x/FooIT.java"));
    }

    #[test]
    fn test_unreadable_root_is_a_traversal_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let result = locate(&missing, "Foo");

        assert!(matches!(result, Err(LocateError::Traversal { .. })));
    }
}
