use crate::doclet::{Doclet, Scope};
use crate::error::DictionaryError;
use crate::tag::Tag;
use std::collections::HashMap;
use std::sync::Arc;

/// Side-effect hook run when a tag with this definition is added to a
/// doclet. Hooks may mutate the doclet arbitrarily.
pub type OnTagged = Arc<dyn Fn(&mut Doclet, &Tag) + Send + Sync>;

/// The definition of a single canonical tag title.
#[derive(Clone)]
pub struct TagDefinition {
    pub title: String,
    pub on_tagged: Option<OnTagged>,
    /// Symbols of this kind are namespacing constructs; their longnames
    /// carry a `kind:` scheme prefix.
    pub is_namespace: bool,
    /// Symbols documented with this tag live in a docspace, so unsafe
    /// characters in their names may need quoting.
    pub sets_docspace: bool,
}

impl TagDefinition {
    pub fn new(title: &str) -> Self {
        TagDefinition {
            title: title.to_lowercase(),
            on_tagged: None,
            is_namespace: false,
            sets_docspace: false,
        }
    }

    pub fn on_tagged(mut self, hook: impl Fn(&mut Doclet, &Tag) + Send + Sync + 'static) -> Self {
        self.on_tagged = Some(Arc::new(hook));
        self
    }

    pub fn namespace(mut self) -> Self {
        self.is_namespace = true;
        self
    }

    pub fn docspace(mut self) -> Self {
        self.sets_docspace = true;
        self
    }
}

/// The outcome of looking a title up in the dictionary.
pub enum Lookup<'a> {
    Known(&'a TagDefinition),
    Unknown,
}

/// The registry of known tag titles and their synonyms.
///
/// A dictionary is populated once, before the first doclet is constructed,
/// and is read-only from then on. Population is the only fallible step in
/// the crate.
#[derive(Clone, Default)]
pub struct Dictionary {
    definitions: HashMap<String, TagDefinition>,
    synonyms: HashMap<String, String>,
}

impl Dictionary {
    /// An empty dictionary. Every tag looked up against it is `Unknown` and
    /// is retained verbatim on the doclet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vocabulary: identity tags (`name`, `kind`,
    /// `description`, `scope`, `memberof`, `variation`), scope directives
    /// (`global`, `static`, `inner`, `instance`), relationship tags
    /// (`borrows`, `augments`) and the kind shorthands (`function`,
    /// `class`, `member`, `property`, `constant`, `event`, `module`,
    /// `namespace`, `mixin`, `file`).
    pub fn core() -> Self {
        let mut dict = Dictionary::new();
        dict.install_core()
            .expect("core vocabulary is internally consistent");
        dict
    }

    /// Registers a canonical tag definition.
    pub fn define(&mut self, definition: TagDefinition) -> Result<(), DictionaryError> {
        let title = definition.title.clone();
        if self.definitions.contains_key(&title) {
            return Err(DictionaryError::DuplicateDefinition { title });
        }
        if self.synonyms.contains_key(&title) {
            return Err(DictionaryError::DuplicateSynonym { alias: title });
        }
        self.definitions.insert(title, definition);
        Ok(())
    }

    /// Maps an alternate spelling onto an already-defined canonical title.
    pub fn synonym(&mut self, canonical: &str, alias: &str) -> Result<(), DictionaryError> {
        let canonical = canonical.to_lowercase();
        let alias = alias.to_lowercase();
        if !self.definitions.contains_key(&canonical) {
            return Err(DictionaryError::UnknownCanonical { canonical, alias });
        }
        if self.definitions.contains_key(&alias) || self.synonyms.contains_key(&alias) {
            return Err(DictionaryError::DuplicateSynonym { alias });
        }
        self.synonyms.insert(alias, canonical);
        Ok(())
    }

    /// Resolves a title to its canonical form: lower case, synonyms
    /// followed. Unrecognized titles come back unchanged (lower-cased).
    pub fn normalize(&self, title: &str) -> String {
        let lowered = title.trim().to_lowercase();
        match self.synonyms.get(&lowered) {
            Some(canonical) => canonical.clone(),
            None => lowered,
        }
    }

    pub fn lookup(&self, title: &str) -> Lookup<'_> {
        match self.definitions.get(&self.normalize(title)) {
            Some(definition) => Lookup::Known(definition),
            None => Lookup::Unknown,
        }
    }

    /// Whether symbols of the given kind denote a namespace-like construct.
    pub fn is_namespace(&self, kind: &str) -> bool {
        self.definitions
            .get(kind)
            .map(|def| def.is_namespace)
            .unwrap_or(false)
    }

    fn install_core(&mut self) -> Result<(), DictionaryError> {
        // Identity tags. name/kind/description/scope are applied by the
        // doclet itself after hook dispatch, so they need no hook here.
        self.define(TagDefinition::new("name").docspace())?;
        self.define(TagDefinition::new("kind"))?;
        self.define(TagDefinition::new("description"))?;
        self.synonym("description", "desc")?;
        self.define(TagDefinition::new("scope"))?;
        self.define(TagDefinition::new("memberof").on_tagged(|doclet, tag| {
            if let Some(value) = &tag.value {
                doclet.set_memberof(value);
            }
        }))?;
        self.define(TagDefinition::new("variation").on_tagged(|doclet, tag| {
            doclet.variation = tag.value.clone();
        }))?;

        // Scope directives.
        self.define(scope_directive("global", Scope::Global))?;
        self.define(scope_directive("static", Scope::Static))?;
        self.define(scope_directive("inner", Scope::Inner))?;
        self.define(scope_directive("instance", Scope::Instance))?;

        // Relationship tags.
        self.define(TagDefinition::new("borrows").on_tagged(|doclet, tag| {
            if let Some(value) = &tag.value {
                match value.split_once(" as ") {
                    Some((source, target)) => doclet.borrow(source.trim(), Some(target.trim())),
                    None => doclet.borrow(value.trim(), None),
                }
            }
        }))?;
        self.define(TagDefinition::new("augments").on_tagged(|doclet, tag| {
            if let Some(value) = &tag.value {
                doclet.augment(value);
            }
        }))?;
        self.synonym("augments", "extends")?;

        // Kind shorthands.
        self.define(TagDefinition::new("function").on_tagged(sets_kind("function")))?;
        self.synonym("function", "func")?;
        self.synonym("function", "method")?;
        self.define(TagDefinition::new("class").on_tagged(sets_kind("class")))?;
        self.synonym("class", "constructor")?;
        self.define(TagDefinition::new("member").on_tagged(sets_kind("member")))?;
        self.synonym("member", "var")?;
        self.define(TagDefinition::new("property").on_tagged(sets_kind("property")))?;
        self.synonym("property", "prop")?;
        self.define(TagDefinition::new("constant").on_tagged(sets_kind("constant")))?;
        self.synonym("constant", "const")?;
        self.define(TagDefinition::new("file").on_tagged(sets_kind("file")))?;
        self.synonym("file", "overview")?;
        self.synonym("file", "fileoverview")?;

        // Namespacing kinds: their longnames carry a scheme prefix.
        self.define(
            TagDefinition::new("event")
                .namespace()
                .on_tagged(sets_kind("event")),
        )?;
        self.define(
            TagDefinition::new("module")
                .namespace()
                .docspace()
                .on_tagged(sets_kind("module")),
        )?;
        self.define(
            TagDefinition::new("namespace")
                .namespace()
                .on_tagged(sets_kind("namespace")),
        )?;
        self.define(
            TagDefinition::new("mixin")
                .namespace()
                .on_tagged(sets_kind("mixin")),
        )?;

        Ok(())
    }
}

/// Hook for kind shorthands like `@class Foo`: fixes the kind and, when the
/// tag carries a value and no explicit name was given yet, adopts it as the
/// name.
fn sets_kind(kind: &'static str) -> impl Fn(&mut Doclet, &Tag) + Send + Sync {
    move |doclet: &mut Doclet, tag: &Tag| {
        doclet.kind = Some(kind.to_string());
        if doclet.name.is_none() {
            if let Some(value) = &tag.value {
                doclet.name = Some(value.clone());
            }
        }
    }
}

fn scope_directive(title: &str, scope: Scope) -> TagDefinition {
    TagDefinition::new(title).on_tagged(move |doclet, _tag| {
        doclet.scope = Some(scope);
    })
}
