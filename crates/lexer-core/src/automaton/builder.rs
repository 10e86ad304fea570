use crate::automaton::edge::{CharClass, EdgeKind};
use crate::automaton::graph::Graph;
use crate::automaton::machine::StateMachine;
use crate::automaton::state::{State, StateId, StateRole};
use crate::error::LexerError;

/// Consuming builder for [`StateMachine`].
///
/// Two construction modes are supported:
///
/// - **manual**: lay out every state with [`add_state`](Self::add_state) and every
///   transition with [`add_edge`](Self::add_edge);
/// - **literal trie**: [`from_literals`](Self::from_literals) expands a list of literal
///   symbols (keywords, operators) into a shared-prefix trie.
///
/// ```
/// use lexer_core::{EdgeKind, State, StateMachine};
///
/// let identifier = StateMachine::builder()
///     .add_state(State::new("building"))
///     .add_state(State::accepting("END"))
///     .add_state(State::error("ERROR"))
///     .add_char_edge("START", "[_A-Za-z]", "building")
///     .add_char_edge("building", "[_A-Za-z0-9]", "building")
///     .add_edge("building", "ACCEPTABLE_SYMBOLS", "END", EdgeKind::AcceptOnBoundary)
///     .add_edge("building", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
///     .build()
///     .unwrap();
/// assert_eq!(identifier.state_count(), 4);
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    graph: Graph,
    error: Option<LexerError>,
}

impl StateMachineBuilder {
    /// A builder holding only the start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state. A second `Start` state is silently ignored.
    pub fn add_state(mut self, state: State) -> Self {
        self.graph.add_state(state);
        self
    }

    /// Add an edge between two states identified by label.
    ///
    /// Unknown labels make this a no-op, and re-adding an existing (src, dst, text)
    /// edge is suppressed. For [`EdgeKind::CharClass`] edges, `edge_text` is a pattern
    /// matched against one whole character; an invalid pattern is reported by
    /// [`build`](Self::build).
    pub fn add_edge(mut self, src: &str, edge_text: &str, dst: &str, kind: EdgeKind) -> Self {
        let (Some(src), Some(dst)) = (
            self.graph.find_state_by_label(src),
            self.graph.find_state_by_label(dst),
        ) else {
            return self;
        };

        let class = if kind == EdgeKind::CharClass {
            match CharClass::pattern(edge_text) {
                Ok(class) => Some(class),
                Err(e) => {
                    self.error.get_or_insert(LexerError::InvalidEdgePattern {
                        pattern: edge_text.to_string(),
                        message: e.to_string(),
                    });
                    return self;
                }
            }
        } else {
            None
        };

        self.graph.connect(src, dst, edge_text, kind, class);
        self
    }

    /// Shorthand for a [`EdgeKind::CharClass`] edge.
    pub fn add_char_edge(self, src: &str, edge_text: &str, dst: &str) -> Self {
        self.add_edge(src, edge_text, dst, EdgeKind::CharClass)
    }

    /// Replace the machine with a trie over `symbols`.
    ///
    /// Existing non-start states are cleared. Each literal walks from the start state,
    /// reusing the edge for an already-seen prefix and creating one state per new
    /// character; the state reached by a literal's last character becomes accepting.
    pub fn from_literals<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.graph.clear();

        for symbol in symbols {
            let symbol = symbol.as_ref();
            if symbol.is_empty() {
                continue;
            }

            let mut current = StateId::START;
            for (i, ch) in symbol.char_indices() {
                let mut buf = [0u8; 4];
                let text = ch.encode_utf8(&mut buf);
                current = match self.graph.find_edge(current, text) {
                    Some(edge) => edge.dst(),
                    None => {
                        let prefix = &symbol[..i + ch.len_utf8()];
                        let next = self.graph.push_state(State::new(prefix));
                        self.graph.connect(
                            current,
                            next,
                            text,
                            EdgeKind::CharClass,
                            Some(CharClass::Literal(ch)),
                        );
                        next
                    }
                };
            }
            self.graph.states[current.index()].set_role(StateRole::Accepting);
        }

        self
    }

    /// Finish the machine.
    pub fn build(self) -> Result<StateMachine, LexerError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(StateMachine::from_graph(self.graph)),
        }
    }
}
