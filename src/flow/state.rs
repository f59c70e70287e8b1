use crate::network::edge::EdgeId;
use crate::network::network::RailNetwork;
use crate::network::vertex::VertexId;

/// Flow assignment for one computation, keyed by edge id. Scratch state
/// lives here instead of on the persistent edges, so a fresh all-zero
/// state starts every top-level solve and queries cannot leak into each
/// other.
pub struct FlowState {
    flow: Vec<u32>,
}

impl FlowState {
    pub fn new(net: &RailNetwork) -> Self {
        Self {
            flow: vec![0; net.edge_slots()],
        }
    }

    pub fn flow(&self, edge: EdgeId) -> u32 {
        self.flow[edge.index()]
    }

    /// Unused capacity in the edge's own direction.
    pub fn forward_residual(&self, net: &RailNetwork, edge: EdgeId) -> u32 {
        net.edge(edge).capacity() - self.flow(edge)
    }

    /// Flow already pushed, which an augmenting path may cancel.
    pub fn backward_residual(&self, edge: EdgeId) -> u32 {
        self.flow(edge)
    }

    pub fn push(&mut self, edge: EdgeId, amount: u32) {
        self.flow[edge.index()] += amount;
    }

    pub fn cancel(&mut self, edge: EdgeId, amount: u32) {
        self.flow[edge.index()] -= amount;
    }

    /// Total flow leaving `v`, the solver's result metric.
    pub fn outflow(&self, net: &RailNetwork, v: VertexId) -> u32 {
        net.vertex(v).outgoing().iter().map(|e| self.flow(*e)).sum()
    }
}
