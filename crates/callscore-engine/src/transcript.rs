//! # Transcript Normalization
//!
//! Transcript entries arrive as plain strings or as structured turns such as
//! `{"speaker": "agent", "text": "..."}`. Rather than branching on every
//! representation, the scorer asks each entry for its text through
//! [`TextSource`]. Entries that yield nothing contribute an empty string.

use serde_json::Value;

/// Anything that can yield a line of transcript text.
pub trait TextSource {
    /// The text this entry contributes, if it has any.
    fn transcript_text(&self) -> Option<&str>;
}

impl TextSource for Value {
    fn transcript_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get("text").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl TextSource for str {
    fn transcript_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextSource for String {
    fn transcript_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn transcript_text(&self) -> Option<&str> {
        (**self).transcript_text()
    }
}

/// Join all entries into one blob separated by single spaces, in order.
pub fn flatten_transcript<T: TextSource>(entries: &[T]) -> String {
    entries
        .iter()
        .map(|entry| entry.transcript_text().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}
