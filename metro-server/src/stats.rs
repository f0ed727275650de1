//! Summary statistics for a network.

use serde::Serialize;

use crate::network::Network;
use crate::planner::distances_from;

/// Station, connection and path-length figures for a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub stations: usize,
    pub connections: usize,
    pub lines: usize,
    /// Transfer station names in first-seen order.
    pub transfer_stations: Vec<String>,
    /// Mean hop distance over all ordered pairs of distinct stations.
    ///
    /// `None` when the network has fewer than two stations or is not
    /// connected, since the mean is undefined there.
    pub average_path_length: Option<f64>,
}

impl NetworkStats {
    /// Compute statistics for `network`.
    ///
    /// Runs one breadth-first search per station.
    pub fn compute(network: &Network) -> Self {
        Self {
            stations: network.station_count(),
            connections: network.connection_count(),
            lines: network.lines().len(),
            transfer_stations: network
                .transfer_stations()
                .map(|s| s.name.to_string())
                .collect(),
            average_path_length: average_path_length(network),
        }
    }
}

fn average_path_length(network: &Network) -> Option<f64> {
    let n = network.node_count();
    if n < 2 {
        return None;
    }

    let mut total = 0usize;
    for ix in network.node_indices() {
        for d in distances_from(network, ix) {
            total += d?;
        }
    }

    Some(total as f64 / (n * (n - 1)) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, LineDefinition, LineTable, StationName};
    use crate::lines::ankara;

    fn network(lines: &[(&str, &[&str])]) -> Network {
        let table = LineTable::new(
            lines
                .iter()
                .map(|(c, stations)| {
                    LineDefinition::new(
                        LineCode::parse(c).unwrap(),
                        "black",
                        stations
                            .iter()
                            .map(|s| StationName::parse(s).unwrap())
                            .collect(),
                    )
                })
                .collect(),
        );
        Network::from_lines(&table).unwrap()
    }

    #[test]
    fn path_of_three() {
        // Distances: A-B 1, B-C 1, A-C 2, each counted both ways
        let stats = NetworkStats::compute(&network(&[("L1", &["A", "B", "C"])]));
        assert_eq!(stats.stations, 3);
        assert_eq!(stats.connections, 2);
        assert_eq!(stats.average_path_length, Some(8.0 / 6.0));
        assert!(stats.transfer_stations.is_empty());
    }

    #[test]
    fn disconnected_has_no_average() {
        let stats = NetworkStats::compute(&network(&[("L1", &["A", "B"]), ("L2", &["C", "D"])]));
        assert_eq!(stats.average_path_length, None);
    }

    #[test]
    fn single_station_has_no_average() {
        let stats = NetworkStats::compute(&network(&[("L1", &["A"])]));
        assert_eq!(stats.stations, 1);
        assert_eq!(stats.average_path_length, None);
    }

    #[test]
    fn ankara_summary() {
        let network = Network::from_lines(&ankara()).unwrap();
        let stats = NetworkStats::compute(&network);

        assert_eq!(stats.stations, 52);
        assert_eq!(stats.connections, 51);
        assert_eq!(stats.lines, 5);
        assert_eq!(stats.transfer_stations, vec!["KIZILAY", "AKM", "HASTANE"]);

        // A tree of 52 stations: the mean is finite and above one hop
        let average = stats.average_path_length.unwrap();
        assert!(average > 1.0 && average < 51.0);
    }
}
