use super::AbsPath;

/// Represents one scanned directory level, with suffix-eligible files and
/// subdirectories. This is a single-level listing, not a full tree scan.
#[derive(Debug)]
pub struct Directory {
    /// files whose suffix matched the filter
    pub files: Vec<AbsPath>,
    /// subdirectories
    pub subdirs: Vec<AbsPath>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            files: vec![],
            subdirs: vec![],
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
