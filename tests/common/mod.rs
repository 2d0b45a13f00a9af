//! Common utils for integration tests
//!
//!

use error_stack::Result;
use resub::{Config, ExecuteError, Resub, RunSummary, Verbosity};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct ItEnv {
    config: Config,
    // owns the scratch tree; dropped (and deleted) with the env
    #[allow(dead_code)]
    root: TempDir,
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl ItEnv {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let source_dir = root.path().join("source");
        let output_dir = root.path().join("output");
        fs::create_dir(&source_dir).unwrap();

        let mut config = Config::default();
        config.source_dir = source_dir.clone();
        config.output_dir = output_dir.clone();
        config.verbosity = Verbosity::Quiet;

        Self {
            config,
            root,
            source_dir,
            output_dir,
        }
    }

    #[inline]
    pub fn execute<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(self)
    }

    #[inline]
    pub fn cfg(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    pub fn run(&self) -> Result<RunSummary, ExecuteError> {
        Resub::run(self.config.clone())
    }

    /// Replace the rule queue with well-formed (pattern, replacement) pairs.
    pub fn set_rules(&mut self, rules: &[(&str, &str)]) {
        self.config.rules = rules
            .iter()
            .map(|(pattern, replacement)| json!([pattern, replacement]))
            .collect();
    }

    /// Append a raw queue entry, valid or not.
    #[allow(dead_code)]
    pub fn push_raw_rule(&mut self, entry: Value) {
        self.config.rules.push(entry);
    }

    pub fn set_source_file(&self, rel_path: &str, contents: &str) {
        self.write_raw(rel_path, contents.as_bytes(), true);
    }

    /// Write raw bytes to a source file, e.g. non-UTF-8 content.
    #[allow(dead_code)]
    pub fn set_source_bytes(&self, rel_path: &str, contents: &[u8]) {
        self.write_raw(rel_path, contents, true);
    }

    /// Overwrite a previously produced output file.
    #[allow(dead_code)]
    pub fn set_output_file(&self, rel_path: &str, contents: &str) {
        self.write_raw(rel_path, contents.as_bytes(), false);
    }

    fn write_raw(&self, rel_path: &str, contents: &[u8], in_source: bool) {
        let base = if in_source {
            &self.source_dir
        } else {
            &self.output_dir
        };
        let path = base.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }

    pub fn assert_output_eq(&self, rel_path: &str, expected: &str) {
        let path = self.output_dir.join(rel_path);
        assert!(
            path.exists(),
            "expected output file `{}` does not exist ({})",
            rel_path,
            self.output_dir.display()
        );
        let actual = fs::read_to_string(&path).unwrap();
        assert_eq!(
            expected,
            actual,
            "output comparison failed for `{}` ({})",
            rel_path,
            self.output_dir.display()
        );
    }

    #[inline]
    pub fn assert_output_exists(&self, rel_path: &str, exists: bool) {
        assert_eq!(
            exists,
            self.output_dir.join(rel_path).exists(),
            "output existence test failed for `{}` ({})",
            rel_path,
            self.output_dir.display()
        );
    }

    /// The source file contents, to check the walk never mutates the source.
    #[allow(dead_code)]
    pub fn source_contents(&self, rel_path: &str) -> String {
        fs::read_to_string(self.source_dir.join(rel_path)).unwrap()
    }
}

macro_rules! testit {
    ($test_name:ident, $fnonce:expr) => {
        #[test]
        fn $test_name() {
            let mut env = ItEnv::new();
            env.execute($fnonce);
        }
    };
}

pub(crate) use testit;
