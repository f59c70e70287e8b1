use crate::network::network::RailNetwork;
use crate::network::station::{Service, Station};

/// Fixed demo network used when no data files are given: the Norte line
/// with a shortcut segment, and a short separate Douro line.
pub struct BasicNetwork;

impl BasicNetwork {
    pub fn build() -> RailNetwork {
        let mut net = RailNetwork::new();
        let stations = [
            ("Porto Campanha", "Porto", "Porto", "Campanha", "Norte"),
            ("Espinho", "Aveiro", "Espinho", "Espinho", "Norte"),
            ("Aveiro", "Aveiro", "Aveiro", "Gloria", "Norte"),
            ("Coimbra B", "Coimbra", "Coimbra", "Santa Cruz", "Norte"),
            ("Lisboa Oriente", "Lisboa", "Lisboa", "Olivais", "Norte"),
            ("Ermesinde", "Porto", "Valongo", "Ermesinde", "Douro"),
            ("Penafiel", "Porto", "Penafiel", "Penafiel", "Douro"),
            ("Regua", "Vila Real", "Peso da Regua", "Regua", "Douro"),
        ];
        for (name, district, municipality, township, line) in stations {
            net.add_station(Station::new(name, district, municipality, township, line));
        }

        let segments = [
            ("Porto Campanha", "Espinho", 12, Service::AlfaPendular),
            ("Espinho", "Aveiro", 10, Service::Standard),
            ("Aveiro", "Coimbra B", 8, Service::Standard),
            ("Coimbra B", "Lisboa Oriente", 8, Service::AlfaPendular),
            ("Porto Campanha", "Aveiro", 4, Service::Standard),
            ("Ermesinde", "Penafiel", 6, Service::Standard),
            ("Penafiel", "Regua", 4, Service::Standard),
        ];
        for (a, b, capacity, service) in segments {
            net.add_segment(a, b, capacity, service)
                .expect("demo stations are registered above");
        }
        net
    }
}
