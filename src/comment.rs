use regex::Regex;
use std::sync::LazyLock;

// == Unwrap patterns ==

static RE_OPENING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/\*\*+").unwrap());

static RE_CLOSING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\**\*/$").unwrap());

// Left margin is considered a star and an optional space. The closing marker
// is replaced by `\Z` beforehand so that a margin-only last line is also
// removed by this pass.
static RE_MARGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*(\* ?|\\Z)").unwrap());

static RE_END_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\\Z$").unwrap());

// == Split patterns ==

static RE_LEADING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*@").unwrap());

// Horizontal whitespace immediately preceding the first tag marker at the
// start of a line. Newlines are excluded so the indentation of one line
// never bleeds into the next.
static RE_TAG_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^\S\r\n]+)@\S").unwrap());

// Only markers at true line starts count as separators; an `@` embedded
// mid-line (an email address, example code) must not start a new segment.
static RE_TAG_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\s*)@(\S)").unwrap());

static RE_TAG_PARSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\S+)(?:\s+(\S.*))?").unwrap());

/// Sequence inserted before each line-leading tag marker so segments can be
/// split out without a lookbehind.
const SPLITTER: &str = "\\@";

/// A raw `(title, text)` pair produced by [`split`], before any dictionary
/// lookup or value resolution has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub title: String,
    pub text: Option<String>,
}

/// Strips the comment markers and the per-line left margin from a raw
/// documentation comment, yielding plain annotated text.
///
/// Trailing whitespace on each line is kept intact: verbatim example blocks
/// depend on it. Already-unwrapped text passes through unchanged, so the
/// function is idempotent.
pub fn unwrap(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let stripped = RE_OPENING.replace(source, "");
    let marked = RE_CLOSING.replace(&stripped, "\\Z");
    let unmargined = RE_MARGIN.replace_all(&marked, "");
    RE_END_MARKER.replace(&unmargined, "").into_owned()
}

/// Prefixes a synthetic `@description` marker when the text does not begin
/// with a tag, so leading free text is captured as the description.
pub fn fix_description(text: &str) -> String {
    if RE_LEADING_TAG.is_match(text) {
        text.to_string()
    } else {
        format!("@description {text}")
    }
}

/// Splits unwrapped comment text into an ordered sequence of raw tags.
///
/// The first whitespace-delimited token of each segment is the title;
/// everything after the first run of whitespace is the text. When the first
/// tag line is indented, that exact indentation is stripped from every line
/// of every segment's text, because multi-line tag text is nested inside
/// both the comment margin and the tag's own indentation.
pub fn split(text: &str) -> Vec<RawTag> {
    let indent_re = RE_TAG_INDENT.captures(text).map(|caps| {
        Regex::new(&format!("(?m)^{}", regex::escape(&caps[1]))).expect("escaped indent pattern")
    });

    let replacement = format!("${{1}}{SPLITTER}${{2}}");
    let marked = RE_TAG_MARKER.replace_all(text, replacement.as_str());

    let mut tags = Vec::new();
    for segment in marked.split(SPLITTER) {
        if segment.is_empty() {
            continue;
        }
        let Some(caps) = RE_TAG_PARSE.captures(segment) else {
            // Whitespace-only leftovers between tags carry no title.
            continue;
        };

        let title = caps[1].to_string();
        let text = caps.get(2).map(|m| match &indent_re {
            Some(re) => re.replace_all(m.as_str(), "").into_owned(),
            None => m.as_str().to_string(),
        });

        tags.push(RawTag { title, text });
    }

    tags
}
