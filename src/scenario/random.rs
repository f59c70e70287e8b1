use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::network::network::RailNetwork;
use crate::network::station::{Service, Station};

/// Seeded demo generator: a few lines, each a chain of stations plus
/// some same-line shortcuts, so every station is reachable on its line.
pub struct RandomNetwork;

impl RandomNetwork {
    pub fn build(seed: u64) -> RailNetwork {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = RailNetwork::new();

        for line in ["Norte", "Douro", "Minho"] {
            let count = rng.gen_range(6..12);
            let names: Vec<String> = (0..count)
                .map(|i| {
                    let name = format!("{line}-{i:02}");
                    net.add_station(Station::new(
                        name.clone(),
                        line,
                        format!("{line} M{}", i % 4),
                        name.clone(),
                        line,
                    ));
                    name
                })
                .collect();

            for pair in names.windows(2) {
                let capacity = rng.gen_range(2..=12);
                let service = if rng.gen_bool(0.25) {
                    Service::AlfaPendular
                } else {
                    Service::Standard
                };
                net.add_segment(&pair[0], &pair[1], capacity, service)
                    .expect("chained stations were just added");
            }

            let shortcuts = names.len() / 3;
            for _ in 0..shortcuts {
                let a = &names[rng.gen_range(0..names.len())];
                let b = &names[rng.gen_range(0..names.len())];
                if a == b {
                    continue;
                }
                let (Some(va), Some(vb)) = (net.find_by_name(a), net.find_by_name(b)) else {
                    continue;
                };
                if net.segment_between(va, vb).is_none() {
                    let capacity = rng.gen_range(2..=12);
                    net.add_segment(a, b, capacity, Service::Standard)
                        .expect("shortcut endpoints exist");
                }
            }
        }
        net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::solver::max_flow;

    #[test]
    fn test_generation_is_deterministic() {
        let first = RandomNetwork::build(7);
        let second = RandomNetwork::build(7);
        assert_eq!(first.station_count(), second.station_count());
        assert_eq!(first.segment_count(), second.segment_count());
    }

    #[test]
    fn test_every_line_is_connected() {
        let net = RandomNetwork::build(42);
        for line in ["Norte", "Douro", "Minho"] {
            let members = net.on_line(line);
            let first = net.vertex(members[0]).station().name().to_string();
            let last = net
                .vertex(*members.last().unwrap())
                .station()
                .name()
                .to_string();
            assert!(max_flow(&net, &first, &last).unwrap() > 0);
        }
    }
}
