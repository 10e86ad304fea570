use crate::error::LexerError;
use crate::language::Language;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A collection of supported languages, keyed by name.
///
/// Passed explicitly to whatever needs to resolve a language; there is no process-wide
/// registry.
#[derive(Debug, Default, Clone)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, Arc<Language>>,
}

impl LanguageCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language. Names are unique within a catalog.
    pub fn register(&mut self, language: Language) -> Result<Arc<Language>, LexerError> {
        if self.languages.contains_key(language.name()) {
            return Err(LexerError::DuplicateLanguage(language.name().to_string()));
        }

        tracing::debug!(language = language.name(), "registered language");
        let language = Arc::new(language);
        self.languages
            .insert(language.name().to_string(), language.clone());
        Ok(language)
    }

    /// Look a language up by name.
    pub fn get(&self, name: &str) -> Option<Arc<Language>> {
        self.languages.get(name).cloned()
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<Arc<Language>, LexerError> {
        self.get(name)
            .ok_or_else(|| LexerError::UnknownLanguage(name.to_string()))
    }

    /// Unregister a language, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Language>> {
        self.languages.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is registered.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
