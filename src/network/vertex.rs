use crate::network::edge::EdgeId;
use crate::network::station::Station;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One station in the graph, with its adjacency. The incoming list holds
/// back-references used by the residual search; it does not own the edges.
pub struct Vertex {
    station: Station,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

impl Vertex {
    pub fn new(station: Station) -> Self {
        Self {
            station,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub(crate) fn attach_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    pub(crate) fn attach_incoming(&mut self, edge: EdgeId) {
        self.incoming.push(edge);
    }

    pub(crate) fn detach_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.retain(|id| *id != edge);
    }

    pub(crate) fn detach_incoming(&mut self, edge: EdgeId) {
        self.incoming.retain(|id| *id != edge);
    }
}
