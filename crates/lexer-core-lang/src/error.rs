use lexer_core::LexerError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading or compiling a YAML language definition.
pub enum LanguageDefinitionError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// The definition is well-formed YAML but describes an invalid language.
    Lexer(#[from] LexerError),

    #[error("unknown literal table '{0}' (expected 'keywords', 'operators' or a list)")]
    /// `literals:` named a table that does not exist.
    UnknownLiteralTable(String),

    #[error("edge {from} -> {to} of '{token}' is a character-class edge without text")]
    /// A `char_class` edge omitted its pattern.
    MissingEdgeText {
        /// Token category the edge belongs to.
        token: String,
        /// Source state label.
        from: String,
        /// Destination state label.
        to: String,
    },

    #[error("token '{0}' defines both literals and states/edges")]
    /// A token mixes the trie and manual construction modes.
    ConflictingAutomaton(String),
}
