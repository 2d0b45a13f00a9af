//! Verbs displayed in the progress output

pub const USING: &str = "Using";
pub const SCANNING: &str = "Scanning";
pub const REPLACING: &str = "Replacing";
pub const SKIPPED: &str = "Skipped";
pub const FAILED: &str = "Failed";
pub const SCANNED: &str = "Scanned";
pub const DONE: &str = "Done";
