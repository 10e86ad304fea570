use crate::token::TokenCategory;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building automata/languages or preparing a compiler.
///
/// Lexical rejection is never an error: unmatched input becomes
/// [`TokenCategory::Unknown`] tokens instead.
pub enum LexerError {
    #[error("no token prototype registered for category '{0}'")]
    /// A language was queried for a category it never registered.
    NoTokenType(TokenCategory),

    #[error("token prototype for category '{0}' registered more than once")]
    /// A language builder received two prototypes for the same category.
    DuplicatePrototype(TokenCategory),

    #[error("invalid priority order: {0}")]
    /// The explicit priority order of a language is malformed.
    InvalidPriority(String),

    #[error("invalid character-class pattern '{pattern}' on edge: {message}")]
    /// A character-class edge text failed to compile.
    InvalidEdgePattern {
        /// The edge text as written by the automaton author.
        pattern: String,
        /// The regex compiler error message.
        message: String,
    },

    #[error("invalid color '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    /// A color string could not be parsed.
    InvalidColor(String),

    #[error("unknown token category '{0}'")]
    /// A category name could not be parsed.
    UnknownCategory(String),

    #[error("language '{0}' is already registered")]
    /// A catalog already holds a language with this name.
    DuplicateLanguage(String),

    #[error("unknown language '{0}'")]
    /// A catalog holds no language with this name.
    UnknownLanguage(String),
}
