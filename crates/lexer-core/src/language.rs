use crate::automaton::StateMachine;
use crate::error::LexerError;
use crate::prototype::TokenPrototype;
use crate::style::FontStyle;
use crate::token::TokenCategory;
use std::collections::HashSet;

/// Literal table a trie-built prototype is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralTable {
    /// The language's predefined keywords.
    Keywords,
    /// The language's predefined operator symbols.
    Operators,
}

/// A fixed-size registry of token prototypes plus keyword and operator tables.
///
/// Built once per supported source language and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    prototypes: [Option<TokenPrototype>; TokenCategory::COUNT],
    keywords: Vec<String>,
    operators: Vec<String>,
    priority: Vec<TokenCategory>,
    keywords_from_identifiers: bool,
}

impl Language {
    /// Start defining a language.
    pub fn builder(name: impl Into<String>) -> LanguageBuilder {
        LanguageBuilder::new(name)
    }

    /// Language name, unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// O(1) lookup by category ordinal.
    pub fn prototype(&self, category: TokenCategory) -> Option<&TokenPrototype> {
        self.prototypes[category.index()].as_ref()
    }

    /// Like [`prototype`](Self::prototype), but a missing category is a configuration error.
    pub fn require_prototype(&self, category: TokenCategory) -> Result<&TokenPrototype, LexerError> {
        self.prototype(category)
            .ok_or(LexerError::NoTokenType(category))
    }

    /// Predefined keywords, in registration order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Predefined operator symbols, in registration order.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Whether `text` is exactly one of the keywords.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| k == text)
    }

    /// Match priority, highest first.
    pub fn priority(&self) -> &[TokenCategory] {
        &self.priority
    }

    /// Whether keywords are found by reclassifying identifiers rather than by trying the
    /// keyword automaton directly.
    pub fn keywords_from_identifiers(&self) -> bool {
        self.keywords_from_identifiers
    }

    /// Categories the compiler tries at each position, in order.
    pub fn trial_order(&self) -> impl Iterator<Item = TokenCategory> + '_ {
        self.priority.iter().copied().filter(|&c| {
            c != TokenCategory::Unknown
                && !(self.keywords_from_identifiers && c == TokenCategory::Keyword)
        })
    }

    /// Style of [`TokenCategory::Unknown`] tokens.
    pub fn unknown_style(&self) -> FontStyle {
        self.prototype(TokenCategory::Unknown)
            .map(|p| *p.style())
            .unwrap_or_else(FontStyle::unknown_default)
    }
}

enum PrototypeSource {
    Machine(StateMachine),
    Literals(LiteralTable),
}

/// Builder for [`Language`].
///
/// ```
/// use lexer_core::{FontStyle, Language, LiteralTable, TokenCategory};
///
/// let language = Language::builder("Tiny")
///     .add_predefined_operators(["+", "="])
///     .add_literal_prototype(TokenCategory::Operator, LiteralTable::Operators, FontStyle::default())
///     .priority([TokenCategory::Operator])
///     .build()
///     .unwrap();
/// assert_eq!(language.operators(), ["+", "="]);
/// ```
pub struct LanguageBuilder {
    name: String,
    prototypes: Vec<(TokenCategory, PrototypeSource, FontStyle)>,
    keywords: Vec<String>,
    operators: Vec<String>,
    priority: Option<Vec<TokenCategory>>,
    keywords_from_identifiers: bool,
}

impl LanguageBuilder {
    /// Start an empty language called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prototypes: Vec::new(),
            keywords: Vec::new(),
            operators: Vec::new(),
            priority: None,
            keywords_from_identifiers: false,
        }
    }

    /// Register a prototype with a ready-made automaton.
    pub fn add_token_prototype(
        mut self,
        category: TokenCategory,
        machine: StateMachine,
        style: FontStyle,
    ) -> Self {
        self.prototypes
            .push((category, PrototypeSource::Machine(machine), style));
        self
    }

    /// Register a prototype whose automaton is a trie over one of the literal tables.
    ///
    /// The trie is built by [`build`](Self::build), so literals added later are included.
    pub fn add_literal_prototype(
        mut self,
        category: TokenCategory,
        table: LiteralTable,
        style: FontStyle,
    ) -> Self {
        self.prototypes
            .push((category, PrototypeSource::Literals(table), style));
        self
    }

    /// Append operator symbols. Single-char symbols also act as token boundaries.
    pub fn add_predefined_operators<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Append keywords.
    pub fn add_predefined_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Explicit match priority. Defaults to [`TokenCategory::ALL`] order.
    pub fn priority<I>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = TokenCategory>,
    {
        self.priority = Some(order.into_iter().collect());
        self
    }

    /// Find keywords by reclassifying identifiers only, without trying the keyword
    /// automaton (which would otherwise match `if` inside `iffy`).
    pub fn keywords_from_identifiers(mut self, enabled: bool) -> Self {
        self.keywords_from_identifiers = enabled;
        self
    }

    /// Validate the priority order, resolve literal prototypes and finish the language.
    pub fn build(self) -> Result<Language, LexerError> {
        let priority = match self.priority {
            Some(order) => {
                validate_priority(&order)?;
                order
            }
            None => TokenCategory::ALL
                .into_iter()
                .filter(|&c| c != TokenCategory::Unknown)
                .collect(),
        };

        let mut prototypes: [Option<TokenPrototype>; TokenCategory::COUNT] = Default::default();
        for (category, source, style) in self.prototypes {
            let slot = &mut prototypes[category.index()];
            if slot.is_some() {
                return Err(LexerError::DuplicatePrototype(category));
            }

            let machine = match source {
                PrototypeSource::Machine(machine) => machine,
                PrototypeSource::Literals(LiteralTable::Keywords) => {
                    StateMachine::builder().from_literals(&self.keywords).build()?
                }
                PrototypeSource::Literals(LiteralTable::Operators) => {
                    StateMachine::builder().from_literals(&self.operators).build()?
                }
            };
            *slot = Some(TokenPrototype::new(category, machine, style));
        }

        Ok(Language {
            name: self.name,
            prototypes,
            keywords: self.keywords,
            operators: self.operators,
            priority,
            keywords_from_identifiers: self.keywords_from_identifiers,
        })
    }
}

fn validate_priority(order: &[TokenCategory]) -> Result<(), LexerError> {
    let mut seen = HashSet::new();
    for &category in order {
        if category == TokenCategory::Unknown {
            return Err(LexerError::InvalidPriority(
                "'unknown' is synthetic and cannot be tried".to_string(),
            ));
        }
        if !seen.insert(category) {
            return Err(LexerError::InvalidPriority(format!(
                "'{category}' listed more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_prototype_is_rejected() {
        let err = Language::builder("Dup")
            .add_token_prototype(TokenCategory::Space, StateMachine::default(), FontStyle::default())
            .add_token_prototype(TokenCategory::Space, StateMachine::default(), FontStyle::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, LexerError::DuplicatePrototype(TokenCategory::Space)));
    }

    #[test]
    fn test_priority_validation() {
        let err = Language::builder("Bad")
            .priority([TokenCategory::Space, TokenCategory::Unknown])
            .build()
            .unwrap_err();
        assert!(matches!(err, LexerError::InvalidPriority(_)));

        let err = Language::builder("Bad")
            .priority([TokenCategory::Space, TokenCategory::Space])
            .build()
            .unwrap_err();
        assert!(matches!(err, LexerError::InvalidPriority(_)));
    }

    #[test]
    fn test_default_priority_excludes_unknown() {
        let language = Language::builder("Default").build().unwrap();
        assert_eq!(language.priority().len(), TokenCategory::COUNT - 1);
        assert_eq!(language.priority()[0], TokenCategory::Comment);
        assert!(!language.priority().contains(&TokenCategory::Unknown));
    }

    #[test]
    fn test_trial_order_skips_keyword_when_reclassifying() {
        let language = Language::builder("Reclass")
            .priority([
                TokenCategory::Keyword,
                TokenCategory::Identifier,
                TokenCategory::Space,
            ])
            .keywords_from_identifiers(true)
            .build()
            .unwrap();
        let order: Vec<_> = language.trial_order().collect();
        assert_eq!(order, vec![TokenCategory::Identifier, TokenCategory::Space]);
    }

    #[test]
    fn test_literal_prototype_sees_late_keywords() {
        let language = Language::builder("Late")
            .add_literal_prototype(TokenCategory::Keyword, LiteralTable::Keywords, FontStyle::default())
            .add_predefined_keywords(["if", "in"])
            .build()
            .unwrap();
        let keyword = language.prototype(TokenCategory::Keyword).unwrap();
        assert_eq!(keyword.machine().state_count(), 4);
        assert!(language.is_keyword("in"));
        assert!(language.prototype(TokenCategory::Identifier).is_none());
        assert!(matches!(
            language.require_prototype(TokenCategory::Identifier),
            Err(LexerError::NoTokenType(TokenCategory::Identifier))
        ));
    }

    #[test]
    fn test_unknown_style_defaults() {
        let language = Language::builder("Plain").build().unwrap();
        assert_eq!(language.unknown_style(), FontStyle::unknown_default());
    }
}
