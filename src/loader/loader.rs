use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use crate::network::network::RailNetwork;
use crate::network::station::{Service, Station};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    MissingField {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: bad capacity `{value}`")]
    BadCapacity { line: usize, value: String },
    #[error("line {line}: unknown service `{value}`")]
    BadService { line: usize, value: String },
}

/// One normalized segment record: always bidirectional, equal capacity
/// both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRecord {
    pub station_a: String,
    pub station_b: String,
    pub capacity: u32,
    pub service: Service,
}

/// Reads station records (name, district, municipality, township, line).
/// The header line is skipped; malformed lines are logged and dropped.
pub fn load_stations(path: &Path) -> Result<Vec<Station>, LoadError> {
    let text = read(path)?;
    let mut stations = Vec::new();
    for (number, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_station(line, number + 1) {
            Ok(station) => stations.push(station),
            Err(err) => warn!("{}: skipping station record: {err}", path.display()),
        }
    }
    info!("loaded {} station records from {}", stations.len(), path.display());
    Ok(stations)
}

/// Reads segment records (stationA, stationB, capacity, service).
pub fn load_segments(path: &Path) -> Result<Vec<SegmentRecord>, LoadError> {
    let text = read(path)?;
    let mut segments = Vec::new();
    for (number, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_segment(line, number + 1) {
            Ok(segment) => segments.push(segment),
            Err(err) => warn!("{}: skipping segment record: {err}", path.display()),
        }
    }
    info!("loaded {} segment records from {}", segments.len(), path.display());
    Ok(segments)
}

/// Builds the network from the two record streams. Duplicate station
/// names keep the first record; duplicate segments and segments with an
/// unknown endpoint are dropped with a warning.
pub fn build_network(stations: Vec<Station>, segments: Vec<SegmentRecord>) -> RailNetwork {
    let mut net = RailNetwork::new();
    for station in stations {
        let name = station.name().to_string();
        if !net.add_station(station) {
            debug!("duplicate station `{name}` ignored");
        }
    }

    let mut seen: HashSet<(String, String)> = HashSet::new();
    for segment in segments {
        let key = if segment.station_a <= segment.station_b {
            (segment.station_a.clone(), segment.station_b.clone())
        } else {
            (segment.station_b.clone(), segment.station_a.clone())
        };
        if !seen.insert(key) {
            debug!(
                "duplicate segment {} / {} ignored",
                segment.station_a, segment.station_b
            );
            continue;
        }
        if let Err(err) = net.add_segment(
            &segment.station_a,
            &segment.station_b,
            segment.capacity,
            segment.service,
        ) {
            warn!(
                "skipping segment {} / {}: {err}",
                segment.station_a, segment.station_b
            );
        }
    }
    net
}

pub fn load_network(stations_path: &Path, segments_path: &Path) -> Result<RailNetwork, LoadError> {
    let stations = load_stations(stations_path)?;
    let segments = load_segments(segments_path)?;
    Ok(build_network(stations, segments))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_station(line: &str, number: usize) -> Result<Station, LoadError> {
    let fields = split_fields(line);
    if fields.len() < 5 {
        return Err(LoadError::MissingField {
            line: number,
            expected: 5,
            found: fields.len(),
        });
    }
    Ok(Station::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
        fields[4].trim(),
    ))
}

fn parse_segment(line: &str, number: usize) -> Result<SegmentRecord, LoadError> {
    let fields = split_fields(line);
    if fields.len() < 4 {
        return Err(LoadError::MissingField {
            line: number,
            expected: 4,
            found: fields.len(),
        });
    }
    let capacity = fields[2].trim().parse::<u32>().map_err(|_| LoadError::BadCapacity {
        line: number,
        value: fields[2].trim().to_string(),
    })?;
    let service = parse_service(fields[3].trim(), number)?;
    Ok(SegmentRecord {
        station_a: fields[0].trim().to_string(),
        station_b: fields[1].trim().to_string(),
        capacity,
        service,
    })
}

fn parse_service(raw: &str, number: usize) -> Result<Service, LoadError> {
    match raw {
        "STANDARD" => Ok(Service::Standard),
        "ALFA PENDULAR" => Ok(Service::AlfaPendular),
        other => Err(LoadError::BadService {
            line: number,
            value: other.to_string(),
        }),
    }
}

/// Comma split tolerating double-quoted fields; station names may
/// contain commas.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_respects_quotes() {
        assert_eq!(
            vec!["Alcantara-Mar, Docas", "Lisboa", "Lisboa"],
            split_fields(r#""Alcantara-Mar, Docas",Lisboa,Lisboa"#)
        );
    }

    #[test]
    fn test_parse_station_record() {
        let station = parse_station("Espinho,Aveiro,Espinho,Espinho,Norte", 2).unwrap();
        assert_eq!("Espinho", station.name());
        assert_eq!("Norte", station.line());
    }

    #[test]
    fn test_parse_station_too_few_fields() {
        assert!(matches!(
            parse_station("Espinho,Aveiro", 3),
            Err(LoadError::MissingField { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_segment_record() {
        let segment = parse_segment("Espinho,Aveiro,10,STANDARD", 2).unwrap();
        assert_eq!("Espinho", segment.station_a);
        assert_eq!(10, segment.capacity);
        assert_eq!(Service::Standard, segment.service);

        let alfa = parse_segment("Porto,Aveiro,12,ALFA PENDULAR", 3).unwrap();
        assert_eq!(Service::AlfaPendular, alfa.service);
    }

    #[test]
    fn test_parse_segment_bad_capacity_and_service() {
        assert!(matches!(
            parse_segment("A,B,many,STANDARD", 4),
            Err(LoadError::BadCapacity { line: 4, .. })
        ));
        assert!(matches!(
            parse_segment("A,B,3,EXPRESS", 5),
            Err(LoadError::BadService { line: 5, .. })
        ));
    }

    #[test]
    fn test_build_network_first_station_wins() {
        let stations = vec![
            Station::new("A", "d1", "m1", "t1", "L1"),
            Station::new("A", "d2", "m2", "t2", "L2"),
            Station::new("B", "d", "m", "t", "L1"),
        ];
        let net = build_network(stations, Vec::new());
        assert_eq!(2, net.station_count());
        let a = net.find_by_name("A").unwrap();
        assert_eq!("L1", net.vertex(a).station().line());
    }

    #[test]
    fn test_build_network_skips_unknown_endpoints_and_duplicates() {
        let stations = vec![
            Station::new("A", "d", "m", "t", "L1"),
            Station::new("B", "d", "m", "t", "L1"),
        ];
        let segments = vec![
            SegmentRecord {
                station_a: "A".to_string(),
                station_b: "B".to_string(),
                capacity: 5,
                service: Service::Standard,
            },
            SegmentRecord {
                station_a: "B".to_string(),
                station_b: "A".to_string(),
                capacity: 5,
                service: Service::Standard,
            },
            SegmentRecord {
                station_a: "A".to_string(),
                station_b: "Z".to_string(),
                capacity: 2,
                service: Service::Standard,
            },
        ];
        let net = build_network(stations, segments);
        assert_eq!(1, net.segment_count());
    }
}
