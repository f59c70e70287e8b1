use crate::network::station::Service;
use crate::network::vertex::VertexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Capacity given to synthetic super-source edges.
pub const UNBOUNDED_CAPACITY: u32 = u32::MAX;

/// Directed edge. Bidirectional insertion creates two of these with equal
/// capacity and service, linked through `reverse`. The link is
/// bookkeeping only; the residual search works off the adjacency lists.
pub struct Edge {
    id: EdgeId,
    origin: VertexId,
    dest: VertexId,
    /// capacity >= flow at all times
    capacity: u32,
    service: Service,
    reverse: Option<EdgeId>,
}

impl Edge {
    pub fn new(id: EdgeId, origin: VertexId, dest: VertexId, capacity: u32, service: Service) -> Self {
        Self {
            id,
            origin,
            dest,
            capacity,
            service,
            reverse: None,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn dest(&self) -> VertexId {
        self.dest
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn reverse(&self) -> Option<EdgeId> {
        self.reverse
    }

    pub(crate) fn set_reverse(&mut self, reverse: EdgeId) {
        self.reverse = Some(reverse);
    }
}
