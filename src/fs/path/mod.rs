//! Wrapper around Path objects provided by the standard library
//!
//! In the program, we use a few kinds of paths:
//! - The source directory being walked, which must exist and is kept absolute
//! - The mirrored output paths, which may not exist yet
//! - Filename suffixes used to select which files are processed
//!
//! The wrappers make sure that paths are always in the correct context,
//! and add convenience methods for suffix extraction and matching.

use std::path::Path;

mod abs_path;
pub use abs_path::*;
mod directory;
pub use directory::*;

pub trait PathSuffix {
    /// Get the filename suffix, including the leading dot (e.g. `.py`).
    ///
    /// Returns `None` if the path has no extension.
    fn suffix(&self) -> Option<String>;

    /// Check if the path's suffix is a member of `suffixes`.
    fn has_suffix_in(&self, suffixes: &[String]) -> bool;
}

impl PathSuffix for Path {
    fn suffix(&self) -> Option<String> {
        self.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
    }

    fn has_suffix_in(&self, suffixes: &[String]) -> bool {
        match self.suffix() {
            Some(s) => suffixes.iter().any(|x| x == &s),
            None => false,
        }
    }
}

#[cfg(test)]
mod ut {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_suffix() {
        assert_eq!(Some(".py".to_string()), PathBuf::from("a/b.py").suffix());
        assert_eq!(
            Some(".txt".to_string()),
            PathBuf::from("b.tar.txt").suffix()
        );
        assert_eq!(None, PathBuf::from("Makefile").suffix());
    }

    #[test]
    fn test_has_suffix_in() {
        let suffixes = vec![".py".to_string(), ".txt".to_string()];
        assert!(PathBuf::from("x/y.py").has_suffix_in(&suffixes));
        assert!(PathBuf::from("y.txt").has_suffix_in(&suffixes));
        assert!(!PathBuf::from("y.rs").has_suffix_in(&suffixes));
        assert!(!PathBuf::from("py").has_suffix_in(&suffixes));
    }
}
