#![warn(missing_docs)]
//! `lexer-core-lang` - built-in languages and data-driven language definitions for `lexer-core`.
//!
//! Languages can be assembled in code (see [`xogue`]) or described in YAML and compiled
//! with [`load_language_from_str`] / [`load_language_from_path`]. A definition lists the
//! keyword and operator tables, an optional priority order, and one automaton per token
//! category, either as a literal trie or as explicit states and edges.

mod definition;
mod error;
pub mod xogue;

pub use definition::{
    EdgeDefinition, EdgeKindDefinition, LanguageDefinition, LiteralSource, RoleDefinition,
    StateDefinition, StyleDefinition, TokenDefinition, load_language_from_path,
    load_language_from_str,
};
pub use error::LanguageDefinitionError;
pub use xogue::{XOGUE, xogue};

use lexer_core::{LanguageCatalog, LexerError};

/// A catalog holding every built-in language.
pub fn builtin_catalog() -> Result<LanguageCatalog, LexerError> {
    let mut catalog = LanguageCatalog::new();
    catalog.register(xogue()?)?;
    Ok(catalog)
}
