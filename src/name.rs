use crate::dictionary::Dictionary;
use crate::doclet::{Doclet, Scope};
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Legacy prototype-path notation: `.prototype.` or a trailing `.prototype`
// both mean instance scope.
static RE_PROTOTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.prototype\.?").unwrap());

// A quoted bracket-or-dot segment used as a property key, e.g. `["foo.bar"]`
// or `"foo.bar"`. Atomic: punctuation inside it is never a scope separator.
static RE_QUOTED_ATOM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\[?".+?"\]?"#).unwrap());

// A separator directly followed by a placeholder's own leading dot.
static RE_DOUBLED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[#.~])\.(@\{\d+\}@)").unwrap());

static RE_VARIATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+)\(([^)]+)\)$").unwrap());

// A name that already carries a scheme prefix, like `module:foo`.
static RE_NAMESPACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+:.+$").unwrap());

const SCOPE_PUNC: [char; 3] = ['#', '.', '~'];

pub(crate) fn scope_to_punc(scope: Scope) -> Option<char> {
    match scope {
        Scope::Static => Some('.'),
        Scope::Inner => Some('~'),
        Scope::Instance => Some('#'),
        Scope::Global => None,
    }
}

pub(crate) fn punc_to_scope(punc: char) -> Option<Scope> {
    match punc {
        '.' => Some(Scope::Static),
        '~' => Some(Scope::Inner),
        '#' => Some(Scope::Instance),
        _ => None,
    }
}

/// The decomposition of a fully-qualified name. Ephemeral: produced by
/// [`shorten`], consumed to fill doclet fields, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub longname: String,
    pub memberof: String,
    pub scope: Option<char>,
    pub name: String,
    pub variation: Option<String>,
}

/// Resolves the name, longname, memberof, scope and variation of a doclet
/// from whatever partial identity information its tags supplied.
pub fn resolve(doclet: &mut Doclet, dictionary: &Dictionary) {
    let name = doclet
        .name
        .as_deref()
        .map(|n| RE_PROTOTYPE.replace_all(n, "#").into_owned())
        .unwrap_or_default();
    let memberof = doclet
        .memberof
        .as_deref()
        .map(|m| RE_PROTOTYPE.replace_all(m, "#").into_owned())
        .unwrap_or_default();

    let about = if memberof.is_empty() {
        shorten(&name)
    } else if name.starts_with(&memberof) {
        // The name is already a full longname, like `@name foo.bar` with
        // `@memberof foo`.
        shorten(&name)
    } else if memberof.ends_with(&SCOPE_PUNC[..]) {
        shorten(&format!("{memberof}{name}"))
    } else if let Some(punc) = doclet.scope.and_then(scope_to_punc) {
        shorten(&format!("{memberof}{punc}{name}"))
    } else {
        // No way to combine the pieces yet; resolution is deferred.
        NameParts::default()
    };

    debug!("resolved {name:?} in {memberof:?} to {about:?}");

    if !about.name.is_empty() {
        doclet.name = Some(about.name.clone());
    }
    if !about.memberof.is_empty() {
        doclet.set_memberof(&about.memberof);
    }
    if !about.longname.is_empty() && doclet.longname.is_none() {
        doclet.set_longname(&about.longname, dictionary);
    }

    if doclet.scope == Some(Scope::Global) {
        // An explicit global directive overrides everything else; this is
        // the one place an existing longname is reset.
        if let Some(name) = doclet.name.clone() {
            doclet.set_longname(&name, dictionary);
        }
        doclet.memberof = None;
    } else if let Some(punc) = about.scope {
        doclet.scope = punc_to_scope(punc);
    } else if doclet.longname.is_none() {
        if let (Some(memberof), Some(name)) = (doclet.memberof.clone(), doclet.name.clone()) {
            // Default scope when none is provided.
            doclet.scope = Some(Scope::Static);
            doclet.set_longname(&format!("{memberof}.{name}"), dictionary);
        }
    }

    if about.variation.is_some() {
        doclet.variation = about.variation;
    }
}

/// Decomposes a longname like `a.b#c(2)` into its memberof (`a.b`), scope
/// (`#`), name (`c`) and variation (`2`).
///
/// Quoted segments are extracted to placeholder tokens first and restored
/// last, so punctuation inside a quoted key is never misread as a scope
/// separator.
pub fn shorten(longname: &str) -> NameParts {
    let mut atoms: Vec<String> = Vec::new();

    let working = RE_QUOTED_ATOM.replace_all(longname, |caps: &Captures| {
        let mut atom = caps[0].to_string();
        if let Some(stripped) = atom.strip_prefix('[') {
            atom = stripped.to_string();
        }
        if let Some(stripped) = atom.strip_suffix(']') {
            atom = stripped.to_string();
        }
        let token = format!(".@{{{}}}@", atoms.len());
        atoms.push(atom);
        token
    });
    let working = RE_DOUBLED_SEPARATOR.replace_all(&working, "${1}${2}");
    let working = RE_PROTOTYPE.replace_all(&working, "#").into_owned();

    // The name is the final component after the last separator.
    let (mut memberof, scope, mut name) = match working.rfind(&SCOPE_PUNC[..]) {
        Some(idx) => (
            working[..idx].to_string(),
            working[idx..].chars().next(),
            working[idx + 1..].to_string(),
        ),
        None => (String::new(), None, working.clone()),
    };
    let mut longname = working;

    let variation = match RE_VARIATION.captures(&name) {
        Some(caps) => {
            let variation = caps[2].to_string();
            name = caps[1].to_string();
            Some(variation)
        }
        None => None,
    };

    for (index, atom) in atoms.iter().enumerate().rev() {
        let token = format!("@{{{index}}}@");
        longname = longname.replace(&token, atom);
        memberof = memberof.replace(&token, atom);
        name = name.replace(&token, atom);
    }

    NameParts {
        longname,
        memberof,
        scope,
        name,
        variation,
    }
}

/// Inserts `ns:` before the final name component of a longname, unless that
/// name already carries a scheme prefix. Used when a symbol's kind is
/// itself a namespacing construct.
pub fn apply_namespace(longname: &str, ns: &str) -> String {
    let parts = shorten(longname);

    if !RE_NAMESPACED.is_match(&parts.name) {
        if let Some(prefix) = parts.longname.strip_suffix(&parts.name) {
            return format!("{prefix}{ns}:{name}", name = parts.name);
        }
    }

    parts.longname
}
