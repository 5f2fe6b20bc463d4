use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DocletError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Errors raised while populating a tag dictionary. The dictionary must be
/// fully built before the first doclet is constructed, so these surface
/// immediately and synchronously; parsing itself never fails.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DictionaryError {
    #[error("tag `{title}` is already defined")]
    #[diagnostic(
        code(dictionary::duplicate_definition),
        help("Each canonical tag title may only be defined once. Use a synonym to map an alternate spelling onto an existing definition.")
    )]
    DuplicateDefinition { title: String },

    #[error("cannot make `{alias}` a synonym of unknown tag `{canonical}`")]
    #[diagnostic(
        code(dictionary::unknown_canonical),
        help("Define the canonical tag before registering synonyms for it.")
    )]
    UnknownCanonical { canonical: String, alias: String },

    #[error("`{alias}` is already in use as a tag title or synonym")]
    #[diagnostic(
        code(dictionary::duplicate_synonym),
        help("A synonym may not shadow an existing definition or synonym.")
    )]
    DuplicateSynonym { alias: String },
}
