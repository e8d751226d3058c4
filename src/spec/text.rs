//! Scalar-or-list text values from loosely shaped YAML fields.
//!
//! Spec authors write most fields either as a single string or as a list of
//! strings. Both shapes decode into the same ordered sequence so the
//! renderer never branches on input shape, and malformed shapes degrade to
//! an empty sequence instead of failing the whole file.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Ordered text items decoded from a scalar-or-list YAML field.
///
/// A scalar keeps its exact content as a one-element sequence; a sequence
/// keeps its string elements in order with surrounding whitespace trimmed;
/// every other shape (number, bool, mapping, tag) normalizes to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextList(Vec<String>);

impl TextList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextList(items.into_iter().map(Into::into).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// True when the field should be treated as absent: no items, or every
    /// item trims to nothing.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|item| item.trim().is_empty())
    }

    /// Single-space join used where a field feeds one line of text, such as
    /// headings and numbered captions.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl From<Value> for TextList {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => TextList(vec![text]),
            Value::Sequence(items) => TextList(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|item| item.trim().to_string())
                    .collect(),
            ),
            _ => TextList::default(),
        }
    }
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(yaml: &str) -> TextList {
        serde_yaml::from_str(yaml).expect("decode text list")
    }

    #[test]
    fn scalar_keeps_one_untrimmed_item() {
        let text = decode("single value");
        assert_eq!(text.items(), ["single value"]);
        let padded = decode("\" padded \"");
        assert_eq!(padded.items(), [" padded "]);
    }

    #[test]
    fn sequence_preserves_order_and_trims_elements() {
        let text = decode("[\" first \", second, \"third \"]");
        assert_eq!(text.items(), ["first", "second", "third"]);
    }

    #[test]
    fn null_and_unrecognized_shapes_are_empty() {
        assert_eq!(decode("null").items().len(), 0);
        assert_eq!(decode("42").items().len(), 0);
        assert_eq!(decode("true").items().len(), 0);
        assert_eq!(decode("{key: value}").items().len(), 0);
    }

    #[test]
    fn non_string_sequence_elements_are_dropped() {
        let text = decode("[one, 2, three]");
        assert_eq!(text.items(), ["one", "three"]);
    }

    #[test]
    fn blankness_covers_empty_and_whitespace() {
        assert!(TextList::default().is_blank());
        assert!(decode("\"\"").is_blank());
        assert!(decode("\"   \"").is_blank());
        assert!(decode("[\"\", \" \"]").is_blank());
        assert!(!decode("[\"\", text]").is_blank());
        assert!(!decode("text").is_blank());
    }

    #[test]
    fn joined_uses_single_spaces() {
        assert_eq!(TextList::new(["a", "b"]).joined(), "a b");
        assert_eq!(TextList::default().joined(), "");
    }
}
