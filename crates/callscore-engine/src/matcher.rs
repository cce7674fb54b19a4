//! # Keyword Matcher
//!
//! Case-insensitive substring search of a keyword list against a text blob.
//! Case folding uses Unicode `to_lowercase`, which is locale-independent and
//! folds umlauts (`Ä` → `ä`); symbols such as `€` have no case and match
//! literally.

/// Keywords found in a text, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    terms: Vec<String>,
}

impl KeywordMatch {
    /// Whether any keyword matched.
    pub fn found(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Matched keywords as configured (not as they appeared in the text).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Consume the match, returning the matched keywords.
    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }
}

/// Find every keyword contained in `text`, ignoring case.
///
/// The result preserves the iteration order of `keywords`, not the order of
/// appearance in `text`.
pub fn match_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> KeywordMatch {
    let folded = text.to_lowercase();
    let terms = keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|keyword| folded.contains(&keyword.to_lowercase()))
        .map(str::to_string)
        .collect();
    KeywordMatch { terms }
}
