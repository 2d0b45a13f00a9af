//! Error types

use std::error;
use std::fmt;
use std::path::Path;

/// Error related to the JSON config document holding the substitution queue.
///
/// All config errors are fatal to the operation that raised them and are
/// propagated to the caller: they indicate a setup mistake the user must fix.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file does not exist.
    NotFound(String),
    /// The config file could not be read, is not valid JSON, or its top
    /// level value is not a JSON object.
    Malformed(String),
    /// A value has the wrong JSON type: a non-object write payload, or a
    /// substitution queue that is not an array.
    TypeMismatch,
    /// The substitution queue key is absent from the config.
    MissingKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file `{path}` does not exist."),
            Self::Malformed(path) => write!(f, "Config file `{path}` is not a valid JSON object."),
            Self::TypeMismatch => write!(f, "Config value has the wrong type."),
            Self::MissingKey(key) => write!(f, "Key `{key}` not in provided config."),
        }
    }
}

impl error::Error for ConfigError {}

/// Error related to paths
#[derive(Debug)]
pub struct PathError {
    /// The path that caused the error, as a string
    pub path: String,
}

impl<P> From<&P> for PathError
where
    P: AsRef<Path>,
{
    fn from(p: &P) -> Self {
        Self {
            path: p.as_ref().display().to_string(),
        }
    }
}

impl fmt::Display for PathError {
    #[cfg(windows)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // on windows, we try to remove the `\\?\` prefix returned
        // by `std::path::Path::display` to make the error message
        // more readable
        let path = if self.path.starts_with(r"\\?\") {
            &self.path[4..]
        } else {
            &self.path
        };
        Self::fmt_internal(path, f)
    }
    #[cfg(not(windows))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_internal(&self.path, f)
    }
}

impl error::Error for PathError {}

impl PathError {
    fn fmt_internal(p: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in path `{p}`")
    }
}
