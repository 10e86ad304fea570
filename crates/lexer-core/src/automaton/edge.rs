use crate::automaton::state::StateId;
use regex::Regex;

/// Edge text of [`EdgeKind::AcceptOnBoundary`] edges.
pub const BOUNDARY_EDGE_TEXT: &str = "ACCEPTABLE_SYMBOLS";

/// Edge text of fallback edges.
pub const FALLBACK_EDGE_TEXT: &str = "OTHERS";

/// How an edge participates in simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeKind {
    /// Consumes the current character if it belongs to the edge's character class.
    #[default]
    CharClass,
    /// Consumes nothing; the token ends here if the current character is whitespace
    /// or one of the language's operator symbols.
    AcceptOnBoundary,
    /// Taken when no sibling edge matches; consumes the character.
    FallbackConsume,
    /// Taken when no sibling edge matches; consumes nothing.
    FallbackNoConsume,
}

impl EdgeKind {
    /// Whether this is one of the two `OTHERS` kinds.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::FallbackConsume | Self::FallbackNoConsume)
    }
}

/// Index of an edge inside its machine. Unique per construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// The raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Single-character matcher of a [`EdgeKind::CharClass`] edge.
#[derive(Debug, Clone)]
pub enum CharClass {
    /// Exactly this character (trie edges).
    Literal(char),
    /// A pattern that must match the whole character, e.g. `[_A-Za-z]` or `E|e`.
    Pattern(Regex),
}

impl CharClass {
    /// Compile `source` anchored to the whole character.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(&format!("^(?:{source})$"))?))
    }

    /// Whether `ch` belongs to the class.
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Self::Literal(c) => *c == ch,
            Self::Pattern(re) => {
                let mut buf = [0u8; 4];
                re.is_match(ch.encode_utf8(&mut buf))
            }
        }
    }
}

/// A directed, labeled transition.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) src: StateId,
    pub(crate) dst: StateId,
    pub(crate) text: String,
    pub(crate) kind: EdgeKind,
    pub(crate) class: Option<CharClass>,
}

impl Edge {
    /// This edge's id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source state.
    pub fn src(&self) -> StateId {
        self.src
    }

    /// Destination state.
    pub fn dst(&self) -> StateId {
        self.dst
    }

    /// The edge text as authored (literal, class pattern or sentinel).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How the edge behaves during simulation.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Character-class test. Always `false` for non-`CharClass` edges.
    pub fn matches_class(&self, ch: char) -> bool {
        self.class.as_ref().is_some_and(|class| class.matches(ch))
    }

    /// Exact test: the edge text is exactly `ch`.
    pub fn matches_exact(&self, ch: char) -> bool {
        let mut chars = self.text.chars();
        chars.next() == Some(ch) && chars.next().is_none()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
