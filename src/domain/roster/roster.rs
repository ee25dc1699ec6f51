//! Roster value object.
//!
//! A roster is the ordered list of team members eligible for a draw.
//! Duplicate names are allowed; each entry occupies its own slot.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordered list of candidate names.
///
/// # Invariants
///
/// - every entry is trimmed and non-empty
/// - order is preserved exactly as entered (until sorted)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    /// Creates an empty roster.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parses editor text, one name per line.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped with the
    /// surrounding whitespace), trimmed, and blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_names(text.lines())
    }

    /// Builds a roster from arbitrary strings, normalizing each entry.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Returns the names in order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Consumes the roster, returning the names.
    pub fn into_names(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy sorted A-Z, ignoring case and accents.
    ///
    /// The sort is stable: names that compare equal under that folding
    /// keep their relative order.
    pub fn sorted(&self) -> Self {
        let mut names = self.0.clone();
        names.sort_by_cached_key(|name| collation_key(name));
        Self(names)
    }

    /// Renders the roster back to editor text.
    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }

    /// Human readable count, e.g. "1 name" or "4 names".
    pub fn count_label(&self) -> String {
        match self.0.len() {
            1 => "1 name".to_string(),
            n => format!("{} names", n),
        }
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Roster::from_names(names))
    }
}

/// Base-letter key for A-Z sorting: decomposed, combining marks dropped,
/// lowercased. "Émile" and "emile" share a key.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
