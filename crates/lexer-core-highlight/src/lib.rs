#![warn(missing_docs)]
//! `lexer-core-highlight` - editor-facing highlighting on top of `lexer-core`.
//!
//! An [`EditorSession`] holds the active language of one editor. Highlighting lexes the
//! document line by line and reports [`StyledSpan`]s in document character offsets,
//! ready to be mapped onto a render layer.

mod error;
mod highlighter;
mod session;

pub use error::HighlightError;
pub use highlighter::{HighlightResult, LineTokens, StyledSpan, TokenHighlighter};
pub use session::EditorSession;
