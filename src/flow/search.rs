use std::collections::VecDeque;

use crate::flow::state::FlowState;
use crate::network::edge::EdgeId;
use crate::network::network::RailNetwork;
use crate::network::vertex::VertexId;

/// One hop of an augmenting path: the edge taken and whether it was
/// traversed along its direction (unused capacity) or against it
/// (cancelable flow).
#[derive(Clone, Copy)]
pub struct PathStep {
    pub edge: EdgeId,
    pub forward: bool,
}

/// Shortest augmenting path by breadth-first search over the residual
/// graph. Forward residuals come from the outgoing list, backward
/// residuals from the incoming list; together they realise the residual
/// graph without mirrored signed edges. Returns the predecessor step per
/// vertex when the sink was reached.
pub fn find_augmenting_path(
    net: &RailNetwork,
    state: &FlowState,
    source: VertexId,
    sink: VertexId,
) -> Option<Vec<Option<PathStep>>> {
    let mut visited = vec![false; net.vertex_slots()];
    let mut steps: Vec<Option<PathStep>> = vec![None; net.vertex_slots()];
    let mut queue = VecDeque::new();
    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        if visited[sink.index()] {
            break;
        }
        for e in net.vertex(v).outgoing() {
            let dest = net.edge(*e).dest();
            if !visited[dest.index()] && state.forward_residual(net, *e) > 0 {
                visited[dest.index()] = true;
                steps[dest.index()] = Some(PathStep {
                    edge: *e,
                    forward: true,
                });
                queue.push_back(dest);
            }
        }
        for e in net.vertex(v).incoming() {
            let origin = net.edge(*e).origin();
            if !visited[origin.index()] && state.backward_residual(*e) > 0 {
                visited[origin.index()] = true;
                steps[origin.index()] = Some(PathStep {
                    edge: *e,
                    forward: false,
                });
                queue.push_back(origin);
            }
        }
    }

    if visited[sink.index()] { Some(steps) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::station::{Service, Station};

    fn station(name: &str) -> Station {
        Station::new(name, "d", "m", "t", "L1")
    }

    #[test]
    fn test_backward_residual_realised_from_incoming_list() {
        let mut net = RailNetwork::new();
        net.add_station(station("a"));
        net.add_station(station("b"));
        let ab = net.add_directed("a", "b", 1, Service::Standard).unwrap();

        let a = net.find_by_name("a").unwrap();
        let b = net.find_by_name("b").unwrap();

        let mut state = FlowState::new(&net);
        assert!(
            find_augmenting_path(&net, &state, b, a).is_none(),
            "no residual from b to a while a->b is empty"
        );

        state.push(ab, 1);
        let steps = find_augmenting_path(&net, &state, b, a).unwrap();
        let step = steps[a.index()].unwrap();
        assert_eq!(ab, step.edge);
        assert!(!step.forward);
    }

    #[test]
    fn test_saturated_edge_not_traversed() {
        let mut net = RailNetwork::new();
        net.add_station(station("a"));
        net.add_station(station("b"));
        let ab = net.add_directed("a", "b", 2, Service::Standard).unwrap();

        let a = net.find_by_name("a").unwrap();
        let b = net.find_by_name("b").unwrap();

        let mut state = FlowState::new(&net);
        assert!(find_augmenting_path(&net, &state, a, b).is_some());
        state.push(ab, 2);
        assert!(find_augmenting_path(&net, &state, a, b).is_none());
    }
}
