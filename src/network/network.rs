use std::collections::HashMap;

use crate::network::edge::{Edge, EdgeId, UNBOUNDED_CAPACITY};
use crate::network::error::NetworkError;
use crate::network::station::{Service, Station};
use crate::network::vertex::{Vertex, VertexId};

/// Everything needed to reattach a removed bidirectional segment. The
/// edges themselves stay in the arena while detached, so a token can be
/// replayed at any later point, in any order relative to other tokens.
#[derive(Debug, PartialEq)]
pub struct SegmentUndo {
    a: VertexId,
    b: VertexId,
    out: EdgeId,
    back: EdgeId,
}

impl SegmentUndo {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }
}

/// The capacitated rail graph. Vertices and edges live in arenas and are
/// addressed by id; removal detaches adjacency entries without moving
/// anything, so outstanding ids never dangle.
pub struct RailNetwork {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Edge>,
    by_name: HashMap<String, VertexId>,
}

impl RailNetwork {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Returns false when a station with this name already exists.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.by_name.contains_key(station.name()) {
            return false;
        }
        let id = VertexId(self.vertices.len());
        self.by_name.insert(station.name().to_string(), id);
        self.vertices.push(Some(Vertex::new(station)));
        true
    }

    /// Inserts both directions of a segment with equal capacity and
    /// service, each linked to the other as its reverse.
    pub fn add_segment(
        &mut self,
        a: &str,
        b: &str,
        capacity: u32,
        service: Service,
    ) -> Result<(), NetworkError> {
        let va = self.require(a)?;
        let vb = self.require(b)?;
        let out = self.insert_edge(va, vb, capacity, service);
        let back = self.insert_edge(vb, va, capacity, service);
        self.edges[out.index()].set_reverse(back);
        self.edges[back.index()].set_reverse(out);
        Ok(())
    }

    fn insert_edge(
        &mut self,
        origin: VertexId,
        dest: VertexId,
        capacity: u32,
        service: Service,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(id, origin, dest, capacity, service));
        self.vertex_mut(origin).attach_outgoing(id);
        self.vertex_mut(dest).attach_incoming(id);
        id
    }

    pub fn find_by_name(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<VertexId, NetworkError> {
        self.find_by_name(name)
            .ok_or_else(|| NetworkError::StationNotFound(name.to_string()))
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.vertices[id.index()]
            .as_ref()
            .expect("vacated vertex slot")
    }

    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        self.vertices[id.index()]
            .as_mut()
            .expect("vacated vertex slot")
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Slots in the vertex arena, vacated ones included.
    pub fn vertex_slots(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_slots(&self) -> usize {
        self.edges.len()
    }

    pub fn stations(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (VertexId(i), v)))
    }

    pub fn station_count(&self) -> usize {
        self.by_name.len()
    }

    /// Attached bidirectional pairs.
    pub fn segment_count(&self) -> usize {
        self.stations().map(|(_, v)| v.outgoing().len()).sum::<usize>() / 2
    }

    pub fn on_line(&self, line: &str) -> Vec<VertexId> {
        self.stations()
            .filter(|(_, v)| v.station().line() == line)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn segment_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.vertex(a)
            .outgoing()
            .iter()
            .copied()
            .find(|e| self.edge(*e).dest() == b)
    }

    /// Detaches both directions of the `a`/`b` segment from all four
    /// adjacency lists and hands back the token that reattaches them.
    pub fn remove_segment(&mut self, a: VertexId, b: VertexId) -> Result<SegmentUndo, NetworkError> {
        let (Some(out), Some(back)) = (self.segment_between(a, b), self.segment_between(b, a))
        else {
            return Err(NetworkError::SegmentNotFound(
                self.vertex(a).station().name().to_string(),
                self.vertex(b).station().name().to_string(),
            ));
        };
        self.vertex_mut(a).detach_outgoing(out);
        self.vertex_mut(b).detach_incoming(out);
        self.vertex_mut(b).detach_outgoing(back);
        self.vertex_mut(a).detach_incoming(back);
        Ok(SegmentUndo { a, b, out, back })
    }

    /// Reattaches a removed segment. A token whose edges are already in
    /// place is rejected, which catches double-restores.
    pub fn restore_segment(&mut self, undo: SegmentUndo) -> Result<(), NetworkError> {
        if self.vertex(undo.a).outgoing().contains(&undo.out) {
            return Err(NetworkError::UndoAlreadyApplied(
                self.vertex(undo.a).station().name().to_string(),
                self.vertex(undo.b).station().name().to_string(),
            ));
        }
        self.vertex_mut(undo.a).attach_outgoing(undo.out);
        self.vertex_mut(undo.b).attach_incoming(undo.out);
        self.vertex_mut(undo.b).attach_outgoing(undo.back);
        self.vertex_mut(undo.a).attach_incoming(undo.back);
        Ok(())
    }

    /// Detaches every edge touching the station, updates the peers'
    /// adjacency, vacates the slot and unregisters the name.
    pub fn remove_vertex(&mut self, name: &str) -> Result<(), NetworkError> {
        let id = self.require(name)?;
        let outgoing = self.vertex(id).outgoing().to_vec();
        let incoming = self.vertex(id).incoming().to_vec();
        for e in outgoing {
            let dest = self.edge(e).dest();
            self.vertex_mut(dest).detach_incoming(e);
        }
        for e in incoming {
            let origin = self.edge(e).origin();
            self.vertex_mut(origin).detach_outgoing(e);
        }
        self.by_name.remove(name);
        self.vertices[id.index()] = None;
        Ok(())
    }

    /// Appends the synthetic super-source vertex and one unbounded edge
    /// per leaf. Only `analysis::inflow`'s scoped guard calls this, and
    /// its `Drop` always follows up with `detach_super_source`.
    pub(crate) fn attach_super_source(
        &mut self,
        line: &str,
        leaves: &[VertexId],
    ) -> (VertexId, Vec<EdgeId>) {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(Vertex::new(Station::synthetic(line))));
        let edges = leaves
            .iter()
            .map(|leaf| self.insert_edge(id, *leaf, UNBOUNDED_CAPACITY, Service::None))
            .collect();
        (id, edges)
    }

    /// Pops the synthetic edges and vertex appended by
    /// `attach_super_source`, leaving the arenas exactly as before.
    pub(crate) fn detach_super_source(&mut self, source: VertexId, synthetic: &[EdgeId]) {
        for e in synthetic.iter().rev() {
            let edge = self.edges.pop().expect("synthetic edge already gone");
            debug_assert_eq!(edge.id(), *e);
            self.vertex_mut(edge.dest()).detach_incoming(*e);
        }
        debug_assert_eq!(source.index() + 1, self.vertices.len());
        self.vertices.pop();
    }
}

#[cfg(test)]
impl RailNetwork {
    /// One-way edge, for residual-graph tests only; loaded data is always
    /// bidirectional.
    pub(crate) fn add_directed(
        &mut self,
        a: &str,
        b: &str,
        capacity: u32,
        service: Service,
    ) -> Result<EdgeId, NetworkError> {
        let va = self.require(a)?;
        let vb = self.require(b)?;
        Ok(self.insert_edge(va, vb, capacity, service))
    }
}
