use log::info;

use crate::analysis::inflow::max_inflow_at;
use crate::network::error::NetworkError;
use crate::network::network::RailNetwork;

/// One ranked entry of the failure analysis.
#[derive(Debug, PartialEq, Eq)]
pub struct Impact {
    pub station: String,
    pub delta: u32,
    pub before: u32,
    pub after: u32,
}

/// Simulates the failure of the `a`/`b` segment and ranks the stations
/// on its line by how much their achievable inflow changes. The segment
/// is restored before returning, whatever the outcome. Ordering: delta
/// descending, then lower remaining inflow, then name; zero-delta
/// stations stay eligible and sort last.
pub fn most_affected_stations(
    net: &mut RailNetwork,
    a: &str,
    b: &str,
    k: usize,
) -> Result<Vec<Impact>, NetworkError> {
    let va = net.require(a)?;
    let vb = net.require(b)?;
    if net.segment_between(va, vb).is_none() {
        return Err(NetworkError::SegmentNotFound(a.to_string(), b.to_string()));
    }

    let line = net.vertex(va).station().line().to_string();
    let members = net.on_line(&line);
    let before: Vec<u32> = members.iter().map(|v| max_inflow_at(net, *v)).collect();

    let undo = net.remove_segment(va, vb)?;
    let after: Vec<u32> = members.iter().map(|v| max_inflow_at(net, *v)).collect();
    net.restore_segment(undo)?;

    let mut impacts: Vec<Impact> = members
        .iter()
        .zip(before.iter().zip(after.iter()))
        .map(|(v, (before, after))| Impact {
            station: net.vertex(*v).station().name().to_string(),
            delta: before.abs_diff(*after),
            before: *before,
            after: *after,
        })
        .collect();
    impacts.sort_by(|x, y| {
        y.delta
            .cmp(&x.delta)
            .then(x.after.cmp(&y.after))
            .then(x.station.cmp(&y.station))
    });
    impacts.truncate(k);

    info!(
        "simulated failure of {a} / {b} across {} stations on line {line}",
        members.len()
    );
    Ok(impacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::solver::max_flow;
    use crate::network::station::{Service, Station};

    fn station(name: &str, line: &str) -> Station {
        Station::new(name, "district", "municipality", "township", line)
    }

    fn linear_network() -> RailNetwork {
        let mut net = RailNetwork::new();
        for name in ["A", "B", "C"] {
            net.add_station(station(name, "L1"));
        }
        net.add_segment("A", "B", 5, Service::Standard).unwrap();
        net.add_segment("B", "C", 3, Service::Standard).unwrap();
        net
    }

    #[test]
    fn test_most_affected_station_loses_all_inflow() {
        let mut net = linear_network();
        let impacts = most_affected_stations(&mut net, "B", "C", 1).unwrap();
        assert_eq!(1, impacts.len());
        assert_eq!("C", impacts[0].station);
        assert_eq!(3, impacts[0].delta);
        assert_eq!(3, impacts[0].before);
        assert_eq!(0, impacts[0].after);
    }

    #[test]
    fn test_full_ranking_order() {
        let mut net = linear_network();
        let impacts = most_affected_stations(&mut net, "B", "C", 3).unwrap();
        let order: Vec<&str> = impacts.iter().map(|i| i.station.as_str()).collect();
        // B and C both lose 3; C keeps less service and ranks first
        assert_eq!(vec!["C", "B", "A"], order);
        assert_eq!(vec![3, 3, 2], impacts.iter().map(|i| i.delta).collect::<Vec<_>>());
    }

    #[test]
    fn test_segment_restored_afterwards() {
        let mut net = linear_network();
        most_affected_stations(&mut net, "B", "C", 2).unwrap();
        assert_eq!(Ok(3), max_flow(&net, "A", "C"));
        assert_eq!(2, net.segment_count());
    }

    #[test]
    fn test_missing_segment_rejected() {
        let mut net = linear_network();
        assert_eq!(
            Err(NetworkError::SegmentNotFound("A".to_string(), "C".to_string())),
            most_affected_stations(&mut net, "A", "C", 1)
        );
    }

    #[test]
    fn test_other_lines_not_measured() {
        let mut net = linear_network();
        net.add_station(station("X", "L2"));
        net.add_station(station("Y", "L2"));
        net.add_segment("X", "Y", 9, Service::Standard).unwrap();

        let impacts = most_affected_stations(&mut net, "A", "B", 10).unwrap();
        assert!(impacts.iter().all(|i| i.station != "X" && i.station != "Y"));
        assert_eq!(3, impacts.len());
    }
}
