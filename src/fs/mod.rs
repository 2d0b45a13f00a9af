//! Wrapper to perform file system operations
//!

mod path;
pub use path::*;
