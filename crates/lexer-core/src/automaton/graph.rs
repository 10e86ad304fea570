use crate::automaton::edge::{CharClass, Edge, EdgeId, EdgeKind};
use crate::automaton::state::{State, StateId, StateRole};

/// Arena of states and edges shared by the builder and the finished machine.
///
/// Slot 0 always holds the start state.
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    pub(crate) states: Vec<State>,
    pub(crate) edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            states: vec![State::start()],
            edges: Vec::new(),
        }
    }
}

impl Graph {
    /// Insert a state. A second `Start` is rejected and an equal state is reused.
    pub(crate) fn add_state(&mut self, state: State) -> Option<StateId> {
        if state.role() == StateRole::Start {
            return None;
        }
        if let Some(existing) = self.find_state(state.label(), state.role()) {
            return Some(existing);
        }
        Some(self.push_state(state))
    }

    pub(crate) fn push_state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub(crate) fn find_state(&self, label: &str, role: StateRole) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.role() == role && s.label() == label)
            .map(StateId)
    }

    pub(crate) fn find_state_by_label(&self, label: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.label() == label)
            .map(StateId)
    }

    pub(crate) fn find_edge(&self, state: StateId, text: &str) -> Option<&Edge> {
        self.states
            .get(state.0)?
            .outgoing
            .iter()
            .map(|id| &self.edges[id.0])
            .find(|edge| edge.text == text)
    }

    /// Connect two states. Returns the existing edge if the same (src, dst, text) edge exists.
    pub(crate) fn connect(
        &mut self,
        src: StateId,
        dst: StateId,
        text: &str,
        kind: EdgeKind,
        class: Option<CharClass>,
    ) -> EdgeId {
        let duplicate = self.states[src.0]
            .outgoing
            .iter()
            .map(|id| &self.edges[id.0])
            .find(|edge| edge.dst == dst && edge.text == text);
        if let Some(edge) = duplicate {
            return edge.id;
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            src,
            dst,
            text: text.to_string(),
            kind,
            class,
        });
        self.states[src.0].outgoing.push(id);
        self.states[dst.0].incoming.push(id);
        id
    }

    /// Drop everything but the start state.
    pub(crate) fn clear(&mut self) {
        self.states.truncate(1);
        self.states[0].outgoing.clear();
        self.states[0].incoming.clear();
        self.edges.clear();
    }
}
