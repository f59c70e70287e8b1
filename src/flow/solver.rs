use crate::flow::search::{PathStep, find_augmenting_path};
use crate::flow::state::FlowState;
use crate::network::error::NetworkError;
use crate::network::network::RailNetwork;
use crate::network::vertex::VertexId;

pub(crate) fn validate_endpoints(
    net: &RailNetwork,
    source: VertexId,
    sink: VertexId,
) -> Result<(), NetworkError> {
    if source == sink {
        return Err(NetworkError::SameStation(
            net.vertex(source).station().name().to_string(),
        ));
    }
    let from_line = net.vertex(source).station().line();
    let to_line = net.vertex(sink).station().line();
    if from_line != to_line {
        return Err(NetworkError::CrossLine {
            from_line: from_line.to_string(),
            to_line: to_line.to_string(),
        });
    }
    Ok(())
}

/// Walks the predecessor chain sink to source and returns the hops in
/// source-to-sink order.
pub(crate) fn collect_path(
    net: &RailNetwork,
    steps: &[Option<PathStep>],
    source: VertexId,
    sink: VertexId,
) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let step = steps[v.index()].expect("broken predecessor chain");
        path.push(step);
        v = if step.forward {
            net.edge(step.edge).origin()
        } else {
            net.edge(step.edge).dest()
        };
    }
    path.reverse();
    path
}

/// Minimum residual over the path's hops.
pub(crate) fn bottleneck(net: &RailNetwork, state: &FlowState, path: &[PathStep]) -> u32 {
    path.iter()
        .map(|step| {
            if step.forward {
                state.forward_residual(net, step.edge)
            } else {
                state.backward_residual(step.edge)
            }
        })
        .min()
        .unwrap_or(0)
}

pub(crate) fn augment(state: &mut FlowState, path: &[PathStep], amount: u32) {
    for step in path {
        if step.forward {
            state.push(step.edge, amount);
        } else {
            state.cancel(step.edge, amount);
        }
    }
}

/// Edmonds-Karp between two vertices, no endpoint validation. Returns the
/// total leaving the source alongside the final flow assignment.
pub(crate) fn edmonds_karp(net: &RailNetwork, source: VertexId, sink: VertexId) -> (u32, FlowState) {
    let mut state = FlowState::new(net);
    while let Some(steps) = find_augmenting_path(net, &state, source, sink) {
        let path = collect_path(net, &steps, source, sink);
        let amount = bottleneck(net, &state, &path);
        augment(&mut state, &path, amount);
    }
    (state.outflow(net, source), state)
}

/// Maximum number of trains that can travel simultaneously between two
/// stations. Rejected when either name is unknown, the stations are the
/// same, or they sit on different lines.
pub fn max_flow(net: &RailNetwork, source: &str, dest: &str) -> Result<u32, NetworkError> {
    let s = net.require(source)?;
    let t = net.require(dest)?;
    validate_endpoints(net, s, t)?;
    let (total, _) = edmonds_karp(net, s, t);
    Ok(total)
}
