use crate::doclet::Meta;
use serde::Serialize;

/// A single annotation taken from a documentation comment.
///
/// The title is normalized to lower case; the title exactly as written is
/// kept in `original_title`. `value` is the trimmed text, absent when the
/// tag carried no text at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub title: String,
    pub original_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
}

impl Tag {
    pub fn new(title: &str, text: Option<&str>, meta: &Meta) -> Self {
        let text = text.map(str::to_string);
        let value = text
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Tag {
            title: title.trim().to_lowercase(),
            original_title: title.to_string(),
            text,
            value,
            lineno: meta.lineno,
        }
    }
}
