use log::debug;

use crate::analysis::probe::standard_service_leaves;
use crate::flow::solver::edmonds_karp;
use crate::network::edge::EdgeId;
use crate::network::error::NetworkError;
use crate::network::network::RailNetwork;
use crate::network::vertex::VertexId;

/// Scoped synthetic super-source. Dropping it detaches and pops every
/// synthetic edge and the synthetic vertex, so the network leaves this
/// scope exactly as it entered it on every path, early returns included.
struct SuperSource<'a> {
    net: &'a mut RailNetwork,
    source: VertexId,
    edges: Vec<EdgeId>,
}

impl<'a> SuperSource<'a> {
    fn attach(net: &'a mut RailNetwork, line: &str, leaves: &[VertexId]) -> Self {
        let (source, edges) = net.attach_super_source(line, leaves);
        Self { net, source, edges }
    }

    fn source(&self) -> VertexId {
        self.source
    }

    fn network(&self) -> &RailNetwork {
        self.net
    }
}

impl Drop for SuperSource<'_> {
    fn drop(&mut self) {
        self.net.detach_super_source(self.source, &self.edges);
    }
}

/// Maximum simultaneous arrivals at `target` from its standard-service
/// subnetwork. The target is never part of its own fan-out; with no
/// other leaves the answer is zero and no flow query runs.
pub(crate) fn max_inflow_at(net: &mut RailNetwork, target: VertexId) -> u32 {
    let mut leaves = standard_service_leaves(net, target);
    leaves.retain(|v| *v != target);
    if leaves.is_empty() {
        return 0;
    }
    let line = net.vertex(target).station().line().to_string();
    let super_source = SuperSource::attach(net, &line, &leaves);
    let (total, _) = edmonds_karp(super_source.network(), super_source.source(), target);
    total
}

pub fn max_inflow(net: &mut RailNetwork, station: &str) -> Result<u32, NetworkError> {
    let target = net.require(station)?;
    let total = max_inflow_at(net, target);
    debug!("max inflow at {station}: {total}");
    Ok(total)
}
