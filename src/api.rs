use crate::dictionary::Dictionary;
use crate::doclet::{Doclet, Meta};

/// Builds a normalized doclet from the raw source of a documentation
/// comment and the metadata of the code it annotates.
///
/// This is the primary entry point. It never fails: malformed or empty
/// comments degrade to a doclet with default fields rather than erroring.
/// The dictionary must be fully populated before the first call and is
/// treated as read-only from then on.
#[must_use]
pub fn describe(comment: &str, meta: Meta, dictionary: &Dictionary) -> Doclet {
    Doclet::new(comment, meta, dictionary)
}

impl Doclet {
    /// Serializes the doclet into a pretty-printed JSON string. Absent
    /// fields are omitted entirely.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the doclet into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
