use crate::automaton::edge::EdgeId;

/// Label of the implicit start state of every machine.
pub const START_LABEL: &str = "START";

/// Role of a state within a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateRole {
    /// The unique entry state.
    Start,
    /// An ordinary state.
    #[default]
    Intermediate,
    /// A valid stopping point.
    Accepting,
    /// An explicit, unrecoverable rejection point.
    Error,
}

/// Index of a state inside its machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The start state always occupies slot 0.
    pub const START: Self = Self(0);

    /// The raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of an automaton.
///
/// Two states are equal iff label and role match; the edge lists are not part of the identity.
#[derive(Debug, Clone)]
pub struct State {
    label: String,
    role: StateRole,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl State {
    /// An intermediate state.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_role(label, StateRole::Intermediate)
    }

    /// A state with an explicit role.
    pub fn with_role(label: impl Into<String>, role: StateRole) -> Self {
        Self {
            label: label.into(),
            role,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// An accepting state.
    pub fn accepting(label: impl Into<String>) -> Self {
        Self::with_role(label, StateRole::Accepting)
    }

    /// An error state.
    pub fn error(label: impl Into<String>) -> Self {
        Self::with_role(label, StateRole::Error)
    }

    pub(crate) fn start() -> Self {
        Self::with_role(START_LABEL, StateRole::Start)
    }

    /// The state label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The state role.
    pub fn role(&self) -> StateRole {
        self.role
    }

    pub(crate) fn set_role(&mut self, role: StateRole) {
        self.role = role;
    }

    /// Whether stopping here accepts the consumed text.
    pub fn is_accepting(&self) -> bool {
        self.role == StateRole::Accepting
    }

    /// Whether entering this state rejects.
    pub fn is_error(&self) -> bool {
        self.role == StateRole::Error
    }

    /// Outgoing edges in insertion order.
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Incoming edges (bookkeeping only; simulation never follows them).
    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.label == other.label
    }
}

impl Eq for State {}
