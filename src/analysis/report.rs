use std::collections::HashMap;

use crate::network::network::RailNetwork;

/// Station pair(s) joined by the highest-capacity segment, each
/// bidirectional pair counted once.
pub fn busiest_pairs(net: &RailNetwork) -> Vec<(String, String, u32)> {
    let mut best = 0u32;
    let mut pairs = Vec::new();
    for (id, vertex) in net.stations() {
        for e in vertex.outgoing() {
            let edge = net.edge(*e);
            if edge.dest().index() < id.index() {
                continue; // mirror direction of a pair already seen
            }
            if edge.capacity() > best {
                best = edge.capacity();
                pairs.clear();
            }
            if edge.capacity() == best && best > 0 {
                pairs.push((
                    vertex.station().name().to_string(),
                    net.vertex(edge.dest()).station().name().to_string(),
                    edge.capacity(),
                ));
            }
        }
    }
    pairs
}

/// Municipalities ranked by the total capacity of segments incident to
/// their stations.
pub fn top_municipalities(net: &RailNetwork, k: usize) -> Vec<(String, u32)> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for (_, vertex) in net.stations() {
        let incident: u32 = vertex
            .outgoing()
            .iter()
            .map(|e| net.edge(*e).capacity())
            .sum();
        *totals.entry(vertex.station().municipality()).or_insert(0) += incident;
    }
    let mut ranked: Vec<(String, u32)> = totals
        .into_iter()
        .map(|(municipality, total)| (municipality.to_string(), total))
        .collect();
    ranked.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::station::{Service, Station};

    fn station(name: &str, municipality: &str) -> Station {
        Station::new(name, "district", municipality, "township", "L1")
    }

    fn sample_network() -> RailNetwork {
        let mut net = RailNetwork::new();
        net.add_station(station("A", "Porto"));
        net.add_station(station("B", "Porto"));
        net.add_station(station("C", "Aveiro"));
        net.add_segment("A", "B", 8, Service::Standard).unwrap();
        net.add_segment("B", "C", 5, Service::Standard).unwrap();
        net
    }

    #[test]
    fn test_busiest_pair_counted_once() {
        let net = sample_network();
        assert_eq!(
            vec![("A".to_string(), "B".to_string(), 8)],
            busiest_pairs(&net)
        );
    }

    #[test]
    fn test_busiest_reports_all_ties() {
        let mut net = sample_network();
        net.add_station(station("D", "Aveiro"));
        net.add_segment("C", "D", 8, Service::Standard).unwrap();

        let pairs = busiest_pairs(&net);
        assert_eq!(2, pairs.len());
        assert!(pairs.iter().all(|(_, _, capacity)| *capacity == 8));
    }

    #[test]
    fn test_busiest_of_empty_network() {
        let net = RailNetwork::new();
        assert!(busiest_pairs(&net).is_empty());
    }

    #[test]
    fn test_municipality_ranking() {
        let net = sample_network();
        // Porto: A (8) + B (8 + 5); Aveiro: C (5)
        assert_eq!(
            vec![("Porto".to_string(), 21), ("Aveiro".to_string(), 5)],
            top_municipalities(&net, 5)
        );
    }

    #[test]
    fn test_municipality_ranking_truncates() {
        let net = sample_network();
        assert_eq!(1, top_municipalities(&net, 1).len());
    }
}
