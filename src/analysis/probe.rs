use std::collections::VecDeque;

use crate::network::network::RailNetwork;
use crate::network::station::Service;
use crate::network::vertex::VertexId;

/// Breadth-first walk from `start` following only standard-service
/// segments. A dequeued vertex that marks no new neighbour is a leaf of
/// the locally reachable standard subnetwork; the start vertex itself
/// qualifies when it marks none.
pub fn standard_service_leaves(net: &RailNetwork, start: VertexId) -> Vec<VertexId> {
    let mut visited = vec![false; net.vertex_slots()];
    let mut leaves = Vec::new();
    let mut queue = VecDeque::new();
    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        let mut boundary = true;
        for e in net.vertex(v).outgoing() {
            let edge = net.edge(*e);
            if edge.service() == Service::Standard && !visited[edge.dest().index()] {
                visited[edge.dest().index()] = true;
                boundary = false;
                queue.push_back(edge.dest());
            }
        }
        if boundary {
            leaves.push(v);
        }
    }
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::station::Station;

    fn station(name: &str) -> Station {
        Station::new(name, "district", "municipality", "township", "L1")
    }

    #[test]
    fn test_leaves_of_a_star() {
        let mut net = RailNetwork::new();
        for name in ["D", "E", "F"] {
            net.add_station(station(name));
        }
        net.add_segment("D", "E", 4, Service::Standard).unwrap();
        net.add_segment("D", "F", 6, Service::Standard).unwrap();

        let d = net.find_by_name("D").unwrap();
        let e = net.find_by_name("E").unwrap();
        let f = net.find_by_name("F").unwrap();

        let leaves = standard_service_leaves(&net, d);
        assert_eq!(vec![e, f], leaves);
    }

    #[test]
    fn test_alfa_pendular_segments_not_followed() {
        let mut net = RailNetwork::new();
        for name in ["A", "B", "C"] {
            net.add_station(station(name));
        }
        net.add_segment("A", "B", 5, Service::Standard).unwrap();
        net.add_segment("B", "C", 3, Service::AlfaPendular).unwrap();

        let a = net.find_by_name("A").unwrap();
        let b = net.find_by_name("B").unwrap();
        let leaves = standard_service_leaves(&net, a);
        assert_eq!(vec![b], leaves);
    }

    #[test]
    fn test_isolated_start_is_its_own_leaf() {
        let mut net = RailNetwork::new();
        net.add_station(station("A"));
        let a = net.find_by_name("A").unwrap();
        assert_eq!(vec![a], standard_service_leaves(&net, a));
    }

    #[test]
    fn test_chain_boundary() {
        let mut net = RailNetwork::new();
        for name in ["A", "B", "C"] {
            net.add_station(station(name));
        }
        net.add_segment("A", "B", 5, Service::Standard).unwrap();
        net.add_segment("B", "C", 3, Service::Standard).unwrap();

        let a = net.find_by_name("A").unwrap();
        let c = net.find_by_name("C").unwrap();
        assert_eq!(vec![c], standard_service_leaves(&net, a));
    }
}
