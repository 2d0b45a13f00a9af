use serde_json::Value;
use std::path::PathBuf;

/// Config for running resub
///
/// Use this to configure resub when calling it from the library
/// # Example
/// ```no_run
/// use resub::{Config, Resub, Verbosity};
/// use serde_json::json;
///
/// let mut cfg = Config::default();
/// cfg.source_dir = "my_module".into();
/// cfg.output_dir = "my_module_out".into();
/// cfg.rules = vec![json!(["from pyqt_interface_elements ", "from . "])];
/// cfg.verbosity = Verbosity::Verbose;
/// Resub::run(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// The source directory to walk. Must exist; never mutated.
    pub source_dir: PathBuf,
    /// The root of the mirrored output tree. Created if missing.
    pub output_dir: PathBuf,
    /// The substitution queue, as raw JSON entries. Entries failing the
    /// two-strings shape check are skipped with a warning.
    pub rules: Vec<Value>,
    /// Filename suffixes (with leading dot) selecting which files are
    /// processed.
    pub extensions: Vec<String>,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Walking the current directory
    /// - Writing the mirror to `./out`
    /// - No substitutions
    /// - Processing `.py` files
    /// - Regular verbosity
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("out"),
            rules: vec![],
            extensions: vec![".py".to_string()],
            verbosity: Verbosity::Normal,
        }
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}
