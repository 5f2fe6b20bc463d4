pub mod api;
pub mod comment;
pub mod dictionary;
pub mod doclet;
pub mod error;
pub mod name;
pub mod tag;

pub use api::describe;
pub use dictionary::{Dictionary, TagDefinition};
pub use doclet::{Doclet, Meta, Scope};
