use crate::core::{Rule, RuleEntry};
use error_stack::{Result, ResultExt};
use regex::RegexBuilder;
use serde_json::Value;
use std::error;
use std::fmt;

/// Error applying a substitution pattern.
///
/// A pattern that fails to compile is a setup mistake in the rule queue,
/// so it is surfaced to the caller instead of being skipped.
#[derive(Debug)]
pub struct SubstError {
    /// The pattern that caused the error
    pub pattern: String,
}

impl fmt::Display for SubstError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cannot apply substitution pattern `{pattern}`",
            pattern = self.pattern
        )
    }
}

impl error::Error for SubstError {}

/// Apply one pattern/replacement to `text`.
///
/// The pattern is compiled with multiline matching enabled, so `^` and `$`
/// anchor at line boundaries. All non-overlapping matches are replaced.
/// The input is not mutated; the substituted text is returned.
pub fn apply_one(text: &str, pattern: &str, replacement: &str) -> Result<String, SubstError> {
    let re = RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .change_context_lazy(|| SubstError {
            pattern: pattern.to_string(),
        })
        .attach_printable("invalid regular expression")?;
    Ok(re.replace_all(text, replacement).into_owned())
}

/// Apply each entry of the substitution queue to `text`, in order.
///
/// The output of each rule is the input to the next, so ordering is
/// significant for overlapping patterns. Entries failing the shape check
/// are skipped with a warning and leave the accumulated text untouched.
/// An empty queue returns the input unchanged.
pub fn apply_chain(text: &str, entries: &[Value]) -> Result<String, SubstError> {
    let mut result = text.to_string();
    for entry in entries {
        match RuleEntry::from(entry) {
            RuleEntry::Valid(Rule {
                pattern,
                replacement,
            }) => {
                result = apply_one(&result, &pattern, &replacement)?;
            }
            RuleEntry::Rejected(raw) => {
                log::warn!("skipping invalid substitution entry: {raw}");
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod ut {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_one_all_matches() {
        let result = apply_one("aaa caa", "a+", "b").unwrap();
        assert_eq!("b cb", result);
    }

    #[test]
    fn test_apply_one_multiline_anchor() {
        let result = apply_one("x\nax\nx", "^x", "y").unwrap();
        assert_eq!("y\nax\ny", result);
    }

    #[test]
    fn test_apply_one_no_match() {
        let result = apply_one("hello", "z+", "y").unwrap();
        assert_eq!("hello", result);
    }

    #[test]
    fn test_apply_one_capture_group() {
        let result = apply_one("from a import b", "from (\\w+) import", "use $1 ::").unwrap();
        assert_eq!("use a :: b", result);
    }

    #[test]
    fn test_apply_one_bad_pattern() {
        assert!(apply_one("text", "(unclosed", "y").is_err());
    }

    #[test]
    fn test_chain_empty_is_identity() {
        let result = apply_chain("unchanged", &[]).unwrap();
        assert_eq!("unchanged", result);
    }

    #[test]
    fn test_chain_order_sensitive() {
        let entries = vec![json!(["a", "b"]), json!(["b", "c"])];
        let result = apply_chain("a", &entries).unwrap();
        assert_eq!("c", result);
    }

    #[test]
    fn test_chain_skips_invalid_entry() {
        let with_invalid = vec![json!(["bad"]), json!(["a", "z"])];
        let without = vec![json!(["a", "z"])];
        assert_eq!(
            apply_chain("banana", &without).unwrap(),
            apply_chain("banana", &with_invalid).unwrap()
        );
    }

    #[test]
    fn test_chain_bad_pattern_is_error() {
        let entries = vec![json!(["(", "y"])];
        assert!(apply_chain("text", &entries).is_err());
    }
}
