use doclet_core::dictionary::Dictionary;
use doclet_core::doclet::{Doclet, Meta, Scope};
use doclet_core::name::{apply_namespace, shorten};

fn describe(comment: &str) -> Doclet {
    let dict = Dictionary::core();
    doclet_core::describe(comment, Meta::default(), &dict)
}

#[test]
fn test_instance_member_from_name_alone() {
    let doclet = describe("/** @name Foo#bar */");
    assert_eq!(doclet.name.as_deref(), Some("bar"));
    assert_eq!(doclet.memberof.as_deref(), Some("Foo"));
    assert_eq!(doclet.longname.as_deref(), Some("Foo#bar"));
    assert_eq!(doclet.scope, Some(Scope::Instance));
}

#[test]
fn test_static_scope_defaulted() {
    let doclet = describe("/** @name bar\n@memberof Foo */");
    assert_eq!(doclet.scope, Some(Scope::Static));
    assert_eq!(doclet.longname.as_deref(), Some("Foo.bar"));
}

#[test]
fn test_memberof_with_trailing_punctuation() {
    let doclet = describe("/** @name bar\n@memberof Foo~ */");
    assert_eq!(doclet.longname.as_deref(), Some("Foo~bar"));
    assert_eq!(doclet.scope, Some(Scope::Inner));
    assert_eq!(doclet.memberof.as_deref(), Some("Foo"));
}

#[test]
fn test_explicit_scope_combines_name_and_memberof() {
    let doclet = describe("/** @name bar\n@memberof Foo\n@instance */");
    assert_eq!(doclet.longname.as_deref(), Some("Foo#bar"));
    assert_eq!(doclet.scope, Some(Scope::Instance));
}

#[test]
fn test_name_that_already_contains_memberof() {
    let doclet = describe("/** @name Foo.bar\n@memberof Foo */");
    assert_eq!(doclet.name.as_deref(), Some("bar"));
    assert_eq!(doclet.memberof.as_deref(), Some("Foo"));
    assert_eq!(doclet.longname.as_deref(), Some("Foo.bar"));
    assert_eq!(doclet.scope, Some(Scope::Static));
}

#[test]
fn test_global_forces_longname_and_clears_memberof() {
    let doclet = describe("/** @name foo\n@memberof Bar\n@global */");
    assert_eq!(doclet.scope, Some(Scope::Global));
    assert_eq!(doclet.longname.as_deref(), Some("foo"));
    assert_eq!(doclet.memberof, None);
}

#[test]
fn test_prototype_notation_normalized() {
    let doclet = describe("/** @name Foo.prototype.bar */");
    assert_eq!(doclet.longname.as_deref(), Some("Foo#bar"));
    assert_eq!(doclet.scope, Some(Scope::Instance));

    let doclet = describe("/** @name bar\n@memberof Foo.prototype */");
    assert_eq!(doclet.longname.as_deref(), Some("Foo#bar"));
    assert_eq!(doclet.scope, Some(Scope::Instance));
}

#[test]
fn test_variation_split_from_name() {
    let doclet = describe("/** @name a.b#c(2) */");
    assert_eq!(doclet.name.as_deref(), Some("c"));
    assert_eq!(doclet.variation.as_deref(), Some("2"));
    assert_eq!(doclet.longname.as_deref(), Some("a.b#c(2)"));
    assert_eq!(doclet.memberof.as_deref(), Some("a.b"));
}

#[test]
fn test_quoted_key_survives_resolution() {
    let doclet = describe(r#"/** @name Foo#"weird.key" */"#);
    assert_eq!(doclet.name.as_deref(), Some(r#""weird.key""#));
    assert_eq!(doclet.memberof.as_deref(), Some("Foo"));
    assert_eq!(doclet.scope, Some(Scope::Instance));
    assert_eq!(doclet.longname.as_deref(), Some(r#"Foo#"weird.key""#));
}

#[test]
fn test_namespace_kind_applies_scheme_prefix() {
    let doclet = describe("/** @module color/mixer */");
    assert_eq!(doclet.kind.as_deref(), Some("module"));
    assert_eq!(doclet.longname.as_deref(), Some("module:color/mixer"));
}

#[test]
fn test_event_member_of_class() {
    let doclet = describe("/** @event snowball\n@memberof Hurl */");
    assert_eq!(doclet.kind.as_deref(), Some("event"));
    assert_eq!(doclet.longname.as_deref(), Some("Hurl.event:snowball"));
    assert_eq!(doclet.scope, Some(Scope::Static));
}

#[test]
fn test_shorten_reconstruction_property() {
    // memberof + scope punctuation + name reproduces the longname whenever
    // all three parts are non-empty.
    for longname in ["Foo#bar", "a.b.c", "outer~inner", "module:m.exported"] {
        let about = shorten(longname);
        assert!(!about.memberof.is_empty());
        let rebuilt = format!("{}{}{}", about.memberof, about.scope.unwrap(), about.name);
        assert_eq!(rebuilt, longname);
    }
}

#[test]
fn test_apply_namespace() {
    assert_eq!(apply_namespace("foo.bar", "module"), "foo.module:bar");
    assert_eq!(apply_namespace("module:foo", "module"), "module:foo");
    assert_eq!(apply_namespace("a#b", "event"), "a#event:b");
}
