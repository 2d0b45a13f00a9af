use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated (pattern, replacement) pair.
///
/// The pattern is a regular expression; the replacement may reference
/// capture groups with `$1`, `$name` etc. (see [`regex::Regex::replace_all`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    pub fn new<P, R>(pattern: P, replacement: R) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Serialize back to the stored form: a two-element JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(vec![
            Value::String(self.pattern.clone()),
            Value::String(self.replacement.clone()),
        ])
    }
}

/// One entry of the substitution queue, after shape validation.
///
/// Raw entries come from JSON and may have any shape. Converting to
/// `RuleEntry` performs the shape check exactly once; downstream code
/// matches on the variant instead of re-checking at each use site.
#[derive(Debug, Clone)]
pub enum RuleEntry {
    Valid(Rule),
    Rejected(Value),
}

impl From<&Value> for RuleEntry {
    fn from(entry: &Value) -> Self {
        match entry {
            Value::Array(items) if items.len() == 2 => {
                match (items[0].as_str(), items[1].as_str()) {
                    (Some(pattern), Some(replacement)) => {
                        Self::Valid(Rule::new(pattern, replacement))
                    }
                    _ => Self::Rejected(entry.clone()),
                }
            }
            _ => Self::Rejected(entry.clone()),
        }
    }
}

/// Check if `entry` is a well-formed substitution entry: an array of
/// exactly two strings. Pure predicate, never fails.
pub fn is_valid_entry(entry: &Value) -> bool {
    matches!(RuleEntry::from(entry), RuleEntry::Valid(_))
}

#[cfg(test)]
mod ut {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_pair() {
        assert!(is_valid_entry(&json!(["p", "r"])));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_entry(&json!(["p"])));
        assert!(!is_valid_entry(&json!(["p", "r", "x"])));
        assert!(!is_valid_entry(&json!([])));
    }

    #[test]
    fn test_non_string_element() {
        assert!(!is_valid_entry(&json!(["p", 1])));
        assert!(!is_valid_entry(&json!([null, "r"])));
    }

    #[test]
    fn test_non_array() {
        assert!(!is_valid_entry(&json!("pr")));
        assert!(!is_valid_entry(&json!({"p": "r"})));
        assert!(!is_valid_entry(&json!(2)));
    }

    #[test]
    fn test_entry_round_trip() {
        let raw = json!(["foo", "bar"]);
        match RuleEntry::from(&raw) {
            RuleEntry::Valid(rule) => assert_eq!(raw, rule.to_value()),
            RuleEntry::Rejected(_) => panic!("entry should be valid"),
        }
    }
}
