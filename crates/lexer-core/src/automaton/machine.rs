use crate::automaton::builder::StateMachineBuilder;
use crate::automaton::edge::{Edge, EdgeId};
use crate::automaton::graph::Graph;
use crate::automaton::state::{State, StateId, StateRole};
use std::fmt;

/// A finished, read-only automaton.
///
/// Produced by [`StateMachineBuilder::build`]; there is no way to mutate a machine
/// once it exists, so a partially built graph can never be simulated.
#[derive(Debug, Clone)]
pub struct StateMachine {
    graph: Graph,
}

impl Default for StateMachine {
    /// A machine holding only its start state. It rejects every input.
    fn default() -> Self {
        Self {
            graph: Graph::default(),
        }
    }
}

impl StateMachine {
    /// Start a new machine.
    pub fn builder() -> StateMachineBuilder {
        StateMachineBuilder::new()
    }

    pub(crate) fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// The unique start state.
    pub fn start(&self) -> StateId {
        StateId::START
    }

    /// The state with `id`.
    pub fn state(&self, id: StateId) -> &State {
        &self.graph.states[id.0]
    }

    /// The edge with `id`.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.graph.edges[id.0]
    }

    /// All states with their ids, start first.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.graph
            .states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i), s))
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.graph.edges
    }

    /// Outgoing edges of `state`, in insertion order.
    pub fn outgoing(&self, state: StateId) -> impl Iterator<Item = &Edge> {
        self.graph.states[state.0]
            .outgoing
            .iter()
            .map(|id| &self.graph.edges[id.0])
    }

    /// Number of states, start included.
    pub fn state_count(&self) -> usize {
        self.graph.states.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edges.len()
    }

    /// Look up a state by its identity (label and role).
    pub fn find_state(&self, label: &str, role: StateRole) -> Option<StateId> {
        self.graph.find_state(label, role)
    }

    /// First state carrying `label`, whatever its role.
    pub fn find_state_by_label(&self, label: &str) -> Option<StateId> {
        self.graph.find_state_by_label(label)
    }

    /// Outgoing edge of `state` whose text is `text`.
    pub fn find_edge(&self, state: StateId, text: &str) -> Option<&Edge> {
        self.graph.find_edge(state, text)
    }
}

impl fmt::Display for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Num of states = {}", self.state_count())?;
        for (id, state) in self.states() {
            writeln!(f, "{} ({:?})", state.label(), state.role())?;
            for edge in self.outgoing(id) {
                writeln!(
                    f,
                    "  --[{:?} {:?}]--> {}",
                    edge.kind(),
                    edge.text(),
                    self.state(edge.dst()).label()
                )?;
            }
        }
        Ok(())
    }
}
