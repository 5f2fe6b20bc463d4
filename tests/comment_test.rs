use doclet_core::comment::{fix_description, split, unwrap, RawTag};

fn pairs(text: &str) -> Vec<(String, Option<String>)> {
    split(text)
        .into_iter()
        .map(|RawTag { title, text }| (title, text))
        .collect()
}

#[test]
fn test_unwrap_strips_margin_and_markers() {
    let source = "/**\n * Trims a string.\n * @param {string} s\n */";
    assert_eq!(unwrap(source), "Trims a string.\n@param {string} s\n");
}

#[test]
fn test_unwrap_single_line_comment() {
    assert_eq!(unwrap("/** hello */"), " hello");
}

#[test]
fn test_unwrap_is_idempotent() {
    let sources = [
        "/**\n * one\n * two\n */",
        "/** @name x */",
        "/**\n * @example\n *    code();  \n */",
    ];
    for source in sources {
        let once = unwrap(source);
        assert_eq!(unwrap(&once), once, "not idempotent for {source:?}");
    }
}

#[test]
fn test_unwrap_empty_source() {
    assert_eq!(unwrap(""), "");
}

#[test]
fn test_fix_description_synthesizes_description_tag() {
    let fixed = fix_description("hello world");
    assert!(fixed.starts_with("@description "));
    assert_eq!(fix_description("@name x"), "@name x");
}

#[test]
fn test_split_two_pairs() {
    let tags = pairs("@name foo\n@kind function");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].0, "name");
    assert_eq!(tags[0].1.as_deref().map(str::trim), Some("foo"));
    assert_eq!(tags[1].0, "kind");
    assert_eq!(tags[1].1.as_deref(), Some("function"));
}

#[test]
fn test_split_preserves_source_order() {
    let tags = pairs("@c 3\n@a 1\n@b 2");
    let titles: Vec<&str> = tags.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[test]
fn test_split_multiline_tag_text() {
    let tags = pairs("@param {string} s the string\n  spanning two lines");
    assert_eq!(tags.len(), 1);
    assert_eq!(
        tags[0].1.as_deref(),
        Some("{string} s the string\n  spanning two lines")
    );
}

#[test]
fn test_split_strips_detected_indentation_from_every_line() {
    let text = "  @param {string} s first\n  continued";
    let tags = pairs(text);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].1.as_deref(), Some("{string} s first\ncontinued"));
}

#[test]
fn test_split_does_not_break_on_embedded_markers() {
    let tags = pairs("@example\n  send(\"user@example.com\");");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].0, "example");
    assert!(tags[0].1.as_deref().unwrap().contains("user@example.com"));
}

#[test]
fn test_split_drops_titleless_segments() {
    assert!(pairs("   \n  ").is_empty());
    assert!(pairs("").is_empty());
}

#[test]
fn test_unwrap_then_split_example_block() {
    let source = "/**\n * @example\n *   var x = add(1, 2);\n */";
    let tags = pairs(&unwrap(source));
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].0, "example");
    // The first run of whitespace after the title is consumed; the example
    // body's own trailing whitespace survives.
    assert_eq!(tags[0].1.as_deref(), Some("var x = add(1, 2);\n"));
}
