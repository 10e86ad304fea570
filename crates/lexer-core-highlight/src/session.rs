use crate::error::HighlightError;
use crate::highlighter::{HighlightResult, TokenHighlighter};
use lexer_core::{Compiler, Language, LanguageCatalog};
use std::sync::Arc;

/// Per-editor highlighting state: which language the open document is lexed with.
///
/// Each editor owns its session, so two editors can use different languages at once.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    highlighter: Option<TokenHighlighter>,
}

impl EditorSession {
    /// A session with no active language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look `name` up in `catalog` and make it the active language.
    ///
    /// The language is checked for a complete configuration before it replaces the
    /// current one; on error the session is left unchanged.
    pub fn set_active_language(
        &mut self,
        catalog: &LanguageCatalog,
        name: &str,
    ) -> Result<Arc<Language>, HighlightError> {
        let language = catalog.require(name)?;
        Compiler::new(&language)?;

        tracing::debug!(language = name, "active language changed");
        self.highlighter = Some(TokenHighlighter::new(language.clone()));
        Ok(language)
    }

    /// The active language, if any.
    pub fn active_language(&self) -> Option<&Arc<Language>> {
        self.highlighter.as_ref().map(TokenHighlighter::language)
    }

    /// Stop highlighting.
    pub fn clear_active_language(&mut self) {
        self.highlighter = None;
    }

    /// Highlight `text` with the active language.
    pub fn highlight(&self, text: &str) -> Result<HighlightResult, HighlightError> {
        self.highlighter
            .as_ref()
            .ok_or(HighlightError::NoActiveLanguage)?
            .highlight(text)
    }
}
