use crate::error::ConfigError;
use error_stack::{Report, Result, ResultExt};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// The well-known config key holding the substitution queue.
pub const SUBSTITUTION_QUEUE_KEY: &str = "substitutionQueueDict";

/// Default config path, relative to the invocation directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// JSON-backed store for the substitution queue.
///
/// The config document is a JSON object read from persistent storage on
/// demand, mutated in memory, and written back wholesale. Concurrent
/// writers are not supported; last writer wins.
///
/// The path is carried explicitly in the store value instead of a hidden
/// module-level default; callers either supply one or accept
/// [`DEFAULT_CONFIG_PATH`] via [`Default`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl ConfigStore {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole config document.
    ///
    /// Fails with [`ConfigError::NotFound`] if the path does not exist,
    /// and with [`ConfigError::Malformed`] if the content cannot be read
    /// or is not a JSON object.
    pub fn read(&self) -> Result<Map<String, Value>, ConfigError> {
        if !self.path.exists() {
            return Err(Report::new(ConfigError::NotFound(self.display_path())));
        }
        let raw = fs::read_to_string(&self.path)
            .change_context_lazy(|| ConfigError::Malformed(self.display_path()))
            .attach_printable("cannot read config file")?;
        let data: Value = serde_json::from_str(&raw)
            .change_context_lazy(|| ConfigError::Malformed(self.display_path()))
            .attach_printable("cannot parse config file as JSON")?;
        match data {
            Value::Object(map) => Ok(map),
            other => Err(
                Report::new(ConfigError::Malformed(self.display_path())).attach_printable(
                    format!("top level value is {}, expected an object", type_name(&other)),
                ),
            ),
        }
    }

    /// Write `data` as the whole config document, overwriting any
    /// existing content.
    ///
    /// Fails with [`ConfigError::TypeMismatch`] if `data` is not a JSON
    /// object.
    pub fn write(&self, data: &Value) -> Result<(), ConfigError> {
        if !data.is_object() {
            return Err(Report::new(ConfigError::TypeMismatch).attach_printable(format!(
                "config root is {}, expected an object",
                type_name(data)
            )));
        }
        let raw = serde_json::to_string_pretty(data)
            .change_context(ConfigError::TypeMismatch)
            .attach_printable("cannot serialize config")?;
        fs::write(&self.path, raw)
            .change_context_lazy(|| ConfigError::Malformed(self.display_path()))
            .attach_printable("cannot write config file")?;
        Ok(())
    }

    /// Read the substitution queue stored under [`SUBSTITUTION_QUEUE_KEY`].
    ///
    /// Fails with [`ConfigError::MissingKey`] if the key is absent, and
    /// with [`ConfigError::TypeMismatch`] if its value is not an array.
    /// Entry shapes are not validated here; see
    /// [`RuleEntry`](crate::RuleEntry).
    pub fn read_rules(&self) -> Result<Vec<Value>, ConfigError> {
        let data = self.read()?;
        match data.get(SUBSTITUTION_QUEUE_KEY) {
            None => Err(Report::new(ConfigError::MissingKey(
                SUBSTITUTION_QUEUE_KEY.to_string(),
            ))),
            Some(Value::Array(entries)) => Ok(entries.clone()),
            Some(other) => Err(Report::new(ConfigError::TypeMismatch).attach_printable(format!(
                "value under `{SUBSTITUTION_QUEUE_KEY}` is {}, expected an array",
                type_name(other)
            ))),
        }
    }

    /// Replace the substitution queue, keeping the rest of the config.
    ///
    /// This is a read-modify-write, not a blind write: it fails if the
    /// config file does not exist yet.
    pub fn write_rules(&self, entries: &[Value]) -> Result<(), ConfigError> {
        let mut data = self.read()?;
        data.insert(
            SUBSTITUTION_QUEUE_KEY.to_string(),
            Value::Array(entries.to_vec()),
        );
        self.write(&Value::Object(data))
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
