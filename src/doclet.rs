use crate::comment;
use crate::dictionary::{Dictionary, Lookup};
use crate::name;
use crate::tag::Tag;
use log::warn;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// The visibility scope of a resolved symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Static,
    Inner,
    Instance,
    Global,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Static => "static",
            Scope::Inner => "inner",
            Scope::Instance => "instance",
            Scope::Global => "global",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Scope::Static),
            "inner" => Ok(Scope::Inner),
            "instance" => Ok(Scope::Instance),
            "global" => Ok(Scope::Global),
            _ => Err(()),
        }
    }
}

/// Metadata about the code construct a comment is attached to, collected by
/// the (out-of-scope) source scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The declaration type of the construct, e.g. `function`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "val", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub code: CodeMeta,
}

/// A `{from, as}` pair recording a symbol whose documentation this doclet
/// reuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Borrowed {
    pub from: String,
    #[serde(rename = "as")]
    pub as_: String,
}

/// A normalized symbol description built from one documentation comment.
///
/// A doclet is mutated only during its own construction and
/// post-processing; afterwards it is handed to downstream consumers as an
/// effectively immutable record.
#[derive(Debug, Clone, Serialize)]
pub struct Doclet {
    pub comment: String,
    pub meta: Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Unrecognized tags, retained verbatim in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub borrowed: Vec<Borrowed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub augments: Vec<String>,
    /// When set by a dictionary hook, post-processing leaves the name
    /// exactly as documented instead of resolving it.
    #[serde(skip)]
    pub preserve_name: bool,
}

impl Doclet {
    /// Builds a doclet from the raw source of a documentation comment and
    /// the metadata of the code it annotates.
    ///
    /// Construction never fails: malformed or empty comments degrade to a
    /// doclet with default fields.
    pub fn new(comment: &str, meta: Meta, dictionary: &Dictionary) -> Self {
        let mut doclet = Doclet::empty(comment, meta);

        let unwrapped = comment::unwrap(comment);
        let fixed = comment::fix_description(&unwrapped);
        for raw in comment::split(&fixed) {
            doclet.add_tag(&raw.title, raw.text.as_deref(), dictionary);
        }

        doclet.post_process(dictionary);
        doclet
    }

    pub(crate) fn empty(comment: &str, meta: Meta) -> Self {
        let mut doclet = Doclet {
            comment: comment.to_string(),
            meta: Meta::default(),
            name: None,
            longname: None,
            memberof: None,
            scope: None,
            kind: None,
            description: None,
            variation: None,
            tags: Vec::new(),
            borrowed: Vec::new(),
            augments: Vec::new(),
            preserve_name: false,
        };
        doclet.merge_meta(meta);
        doclet
    }

    /// Merges newly supplied metadata, overwriting a field only when the
    /// incoming one is present.
    fn merge_meta(&mut self, meta: Meta) {
        if meta.lineno.is_some() {
            self.meta.lineno = meta.lineno;
        }
        if meta.filename.is_some() {
            self.meta.filename = meta.filename;
        }
        if meta.code.id.is_some() {
            self.meta.code.id = meta.code.id;
        }
        if meta.code.name.is_some() {
            self.meta.code.name = meta.code.name;
        }
        if meta.code.kind.is_some() {
            self.meta.code.kind = meta.code.kind;
        }
        if meta.code.value.is_some() {
            self.meta.code.value = meta.code.value;
        }
    }

    /// Adds one tag to this doclet: dictionary hook for recognized titles,
    /// verbatim retention for unrecognized ones, and in either case the
    /// universal identity titles are applied last.
    pub fn add_tag(&mut self, title: &str, text: Option<&str>, dictionary: &Dictionary) {
        let tag = Tag::new(title, text, &self.meta);
        let canonical = dictionary.normalize(&tag.title);

        match dictionary.lookup(&tag.title) {
            Lookup::Known(definition) => {
                let hook = definition.on_tagged.clone();
                if let Some(hook) = hook {
                    hook(self, &tag);
                }
                self.apply_universal(&canonical, &tag);
            }
            Lookup::Unknown => {
                self.apply_universal(&canonical, &tag);
                self.tags.push(tag);
            }
        }
    }

    /// The four titles every dictionary is assumed to understand. Applied
    /// after hook dispatch, so for scalar fields the last write wins.
    fn apply_universal(&mut self, title: &str, tag: &Tag) {
        match title {
            "name" => self.name = tag.value.clone(),
            "kind" => self.kind = tag.value.clone(),
            "description" => self.description = tag.value.clone(),
            "scope" => match tag.value.as_deref() {
                Some(value) => match Scope::from_str(value) {
                    Ok(scope) => self.scope = Some(scope),
                    Err(()) => {
                        warn!("ignoring unrecognized scope value {value:?}");
                    }
                },
                None => self.scope = None,
            },
            _ => {}
        }
    }

    /// Called once after all tags have been added: resolves the symbol's
    /// identity and infers a kind when none was documented.
    fn post_process(&mut self, dictionary: &Dictionary) {
        if !self.preserve_name {
            name::resolve(self, dictionary);
        }

        if self.longname.is_none() {
            if let Some(name) = self.name.clone() {
                self.set_longname(&name, dictionary);
            }
        }

        if self.kind.is_none() {
            let inferred = codetype_to_kind(self.meta.code.kind.as_deref());
            self.add_tag("kind", Some(inferred), dictionary);
        }
    }

    /// Sets the longname of the symbol this doclet is a member of.
    pub fn set_memberof(&mut self, id: &str) {
        self.memberof = Some(id.to_string());
    }

    /// Sets the longname, applying the kind's scheme prefix when the kind
    /// is a namespacing construct.
    pub fn set_longname(&mut self, longname: &str, dictionary: &Dictionary) {
        match self.kind.as_deref() {
            Some(kind) if dictionary.is_namespace(kind) => {
                self.longname = Some(name::apply_namespace(longname, kind));
            }
            _ => self.longname = Some(longname.to_string()),
        }
    }

    /// Records a symbol whose documentation this doclet reuses, optionally
    /// under a different name.
    pub fn borrow(&mut self, source: &str, target: Option<&str>) {
        self.borrowed.push(Borrowed {
            from: source.to_string(),
            as_: target.unwrap_or(source).to_string(),
        });
    }

    /// Records a base symbol this doclet extends.
    pub fn augment(&mut self, base: &str) {
        self.augments.push(base.to_string());
    }
}

// Any code construct other than a callable maps to `property`; the kind
// vocabulary is an external contract, so no richer taxonomy is inferred.
fn codetype_to_kind(code_kind: Option<&str>) -> &'static str {
    match code_kind {
        Some(kind) if kind.eq_ignore_ascii_case("function") => "function",
        _ => "property",
    }
}
