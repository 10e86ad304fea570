use lexer_core::LexerError;
use thiserror::Error;

/// Errors produced by the highlighting layer.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Highlighting was requested before a language was selected.
    #[error("no active language selected")]
    NoActiveLanguage,

    /// The language could not be prepared for lexing.
    #[error(transparent)]
    Lexer(#[from] LexerError),
}
