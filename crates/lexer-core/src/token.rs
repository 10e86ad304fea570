use crate::error::LexerError;
use crate::style::FontStyle;
use std::fmt;
use std::str::FromStr;

/// Classification of a span of source text.
///
/// Declaration order is the default match priority of a [`Language`](crate::Language).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    /// Line and block comments.
    Comment,
    /// Reserved words of the language.
    Keyword,
    /// Names.
    Identifier,
    /// Double-quoted string literals.
    String,
    /// Single-quoted character literals.
    Char,
    /// Operator and punctuation symbols.
    Operator,
    /// Floating-point literals.
    Floating,
    /// Integer literals in any radix.
    Integer,
    /// Whitespace, including line terminators.
    Space,
    /// Synthetic category for input no automaton accepts. Never tried directly.
    Unknown,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Comment,
        Self::Keyword,
        Self::Identifier,
        Self::String,
        Self::Char,
        Self::Operator,
        Self::Floating,
        Self::Integer,
        Self::Space,
        Self::Unknown,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal, usable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used by configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Char => "char",
            Self::Operator => "operator",
            Self::Floating => "floating",
            Self::Integer => "integer",
            Self::Space => "space",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenCategory {
    type Err = LexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| LexerError::UnknownCategory(s.to_string()))
    }
}

/// A lexed span: category, matched text and resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    category: TokenCategory,
    text: String,
    style: FontStyle,
}

impl Token {
    /// Create a token.
    pub fn new(category: TokenCategory, text: impl Into<String>, style: FontStyle) -> Self {
        Self {
            category,
            text: text.into(),
            style,
        }
    }

    /// Category the token was classified as.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// The matched source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style resolved from the category's prototype.
    pub fn style(&self) -> &FontStyle {
        &self.style
    }

    /// Length in chars (the unit used for editor columns).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
