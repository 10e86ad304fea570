use crate::automaton::{EdgeKind, StateMachine};
use crate::style::FontStyle;
use crate::token::TokenCategory;

/// Result of running one automaton against the head of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome<'t> {
    accepted: bool,
    consumed: &'t str,
}

impl<'t> MatchOutcome<'t> {
    fn accept(text: &'t str, end: usize) -> Self {
        Self {
            accepted: true,
            consumed: &text[..end],
        }
    }

    fn reject(text: &'t str, end: usize) -> Self {
        Self {
            accepted: false,
            consumed: &text[..end],
        }
    }

    /// Whether the automaton accepted a prefix.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The accepted prefix, or on rejection the prefix consumed before the automaton
    /// gave up.
    pub fn consumed(&self) -> &'t str {
        self.consumed
    }
}

/// Binds a token category to its automaton and presentation style.
#[derive(Debug, Clone)]
pub struct TokenPrototype {
    category: TokenCategory,
    machine: StateMachine,
    style: FontStyle,
}

impl TokenPrototype {
    /// Bind `machine` and `style` to `category`.
    pub fn new(category: TokenCategory, machine: StateMachine, style: FontStyle) -> Self {
        Self {
            category,
            machine,
            style,
        }
    }

    /// The category this prototype recognizes.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// The automaton simulated by [`matches`](Self::matches).
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Style given to accepted tokens.
    pub fn style(&self) -> &FontStyle {
        &self.style
    }

    /// Simulate the automaton on the head of `text`.
    ///
    /// At each step the non-fallback edges of the current state are tried in insertion
    /// order: a character-class edge consumes a matching character, and a boundary edge
    /// ends the token (without consuming) when the current character is whitespace or
    /// one of `operators`. If nothing matches, a fallback edge is taken, consuming or
    /// not depending on its kind. With no fallback either, the text consumed so far is
    /// accepted iff the current state is accepting. Entering an error state rejects
    /// immediately, and so does running out of input outside an accepting state.
    ///
    /// Operator automata are literal tries, so their edges compare characters exactly.
    pub fn matches<'t, S: AsRef<str>>(&self, text: &'t str, operators: &[S]) -> MatchOutcome<'t> {
        let machine = &self.machine;
        let exact = self.category == TokenCategory::Operator;
        let is_boundary = |ch: char| {
            ch.is_whitespace() || operators.iter().any(|op| is_single_char(op.as_ref(), ch))
        };

        let mut state = machine.start();
        let mut pos = 0usize;
        // Non-consuming transitions since the last consumed character. More of them than
        // there are states means a cycle of fallback edges that never reads input.
        let mut stalled = 0usize;

        loop {
            let Some(ch) = text[pos..].chars().next() else {
                return if machine.state(state).is_accepting() {
                    MatchOutcome::accept(text, pos)
                } else {
                    MatchOutcome::reject(text, pos)
                };
            };

            let mut next = None;
            for edge in machine.outgoing(state) {
                match edge.kind() {
                    EdgeKind::CharClass => {
                        let hit = if exact {
                            edge.matches_exact(ch)
                        } else {
                            edge.matches_class(ch)
                        };
                        if hit {
                            next = Some((edge.dst(), true));
                            break;
                        }
                    }
                    EdgeKind::AcceptOnBoundary => {
                        if is_boundary(ch) {
                            return MatchOutcome::accept(text, pos);
                        }
                    }
                    EdgeKind::FallbackConsume | EdgeKind::FallbackNoConsume => {}
                }
            }

            if next.is_none() {
                next = machine
                    .outgoing(state)
                    .find(|edge| edge.kind().is_fallback())
                    .map(|edge| (edge.dst(), edge.kind() == EdgeKind::FallbackConsume));
            }

            let Some((dst, consume)) = next else {
                return if machine.state(state).is_accepting() {
                    MatchOutcome::accept(text, pos)
                } else {
                    MatchOutcome::reject(text, pos)
                };
            };

            if machine.state(dst).is_error() {
                return MatchOutcome::reject(text, pos);
            }

            if consume {
                pos += ch.len_utf8();
                stalled = 0;
            } else {
                stalled += 1;
                if stalled > machine.state_count() {
                    return MatchOutcome::reject(text, pos);
                }
            }
            state = dst;
        }
    }
}

fn is_single_char(symbol: &str, ch: char) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::State;

    fn identifier() -> TokenPrototype {
        let machine = StateMachine::builder()
            .add_state(State::new("building"))
            .add_state(State::error("ERROR"))
            .add_state(State::accepting("identifierEND"))
            .add_char_edge("START", "[_A-Za-z]", "building")
            .add_char_edge("building", "[_A-Za-z0-9]", "building")
            .add_edge(
                "building",
                "ACCEPTABLE_SYMBOLS",
                "identifierEND",
                EdgeKind::AcceptOnBoundary,
            )
            .add_edge("building", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
            .build()
            .unwrap();
        TokenPrototype::new(TokenCategory::Identifier, machine, FontStyle::default())
    }

    fn line_comment() -> TokenPrototype {
        let machine = StateMachine::builder()
            .add_state(State::new("/"))
            .add_state(State::new("//"))
            .add_state(State::accepting("//...END"))
            .add_char_edge("START", r"\/", "/")
            .add_char_edge("/", r"\/", "//")
            .add_char_edge("//", "\n", "//...END")
            .add_edge("//", "OTHERS", "//", EdgeKind::FallbackConsume)
            .build()
            .unwrap();
        TokenPrototype::new(TokenCategory::Comment, machine, FontStyle::default())
    }

    #[test]
    fn test_boundary_edge_stops_before_whitespace() {
        let outcome = identifier().matches("abc ", &[";"]);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.consumed(), "abc");
    }

    #[test]
    fn test_boundary_edge_stops_before_operator() {
        let outcome = identifier().matches("abc;x", &[";"]);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.consumed(), "abc");
    }

    #[test]
    fn test_multi_char_operators_are_not_boundaries() {
        let outcome = identifier().matches("ab+=", &["+="]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "ab");
    }

    #[test]
    fn test_error_state_rejects_without_consuming() {
        let outcome = identifier().matches("ab$c", &[";"]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "ab");
    }

    #[test]
    fn test_exhausted_input_outside_accepting_state_rejects() {
        let outcome = identifier().matches("abc", &[";"]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "abc");
    }

    #[test]
    fn test_no_edge_from_start_rejects_empty() {
        let outcome = identifier().matches("9", &[";"]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "");
    }

    #[test]
    fn test_fallback_consume_loops_until_terminator() {
        let outcome = line_comment().matches("// a * b\nrest", &["*"]);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.consumed(), "// a * b\n");
    }

    #[test]
    fn test_unterminated_comment_reports_consumed_prefix() {
        let outcome = line_comment().matches("// open", &["*"]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "// open");
    }

    #[test]
    fn test_operator_edges_compare_exactly() {
        let machine = StateMachine::builder()
            .from_literals(["=", "==", "*"])
            .build()
            .unwrap();
        let op = TokenPrototype::new(TokenCategory::Operator, machine, FontStyle::default());
        let ops: [&str; 0] = [];
        assert_eq!(op.matches("==1", &ops).consumed(), "==");
        assert_eq!(op.matches("=1", &ops).consumed(), "=");
        assert_eq!(op.matches("*", &ops).consumed(), "*");
        assert!(!op.matches("+", &ops).is_accepted());
    }

    #[test]
    fn test_no_consume_cycle_is_rejected() {
        let machine = StateMachine::builder()
            .add_state(State::new("a"))
            .add_state(State::new("b"))
            .add_edge("START", "OTHERS", "a", EdgeKind::FallbackNoConsume)
            .add_edge("a", "OTHERS", "b", EdgeKind::FallbackNoConsume)
            .add_edge("b", "OTHERS", "a", EdgeKind::FallbackNoConsume)
            .build()
            .unwrap();
        let proto = TokenPrototype::new(TokenCategory::Comment, machine, FontStyle::default());
        let outcome = proto.matches("x", &[";"]);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.consumed(), "");
    }

    #[test]
    fn test_fallback_no_consume_into_accepting_state() {
        let machine = StateMachine::builder()
            .add_state(State::new("digits"))
            .add_state(State::accepting("END"))
            .add_char_edge("START", "[0-9]", "digits")
            .add_char_edge("digits", "[0-9]", "digits")
            .add_edge("digits", "OTHERS", "END", EdgeKind::FallbackNoConsume)
            .build()
            .unwrap();
        let proto = TokenPrototype::new(TokenCategory::Integer, machine, FontStyle::default());
        let outcome = proto.matches("42px", &[";"]);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.consumed(), "42");
    }
}
