//! Two-phase network construction.
//!
//! Line definitions are accumulated into a mutable [`NetworkBuilder`],
//! which is then frozen into an immutable [`Network`]. Nothing outside
//! this module ever sees a partially built network.

use std::collections::HashMap;

use petgraph::graph::UnGraph;
use tracing::{debug, info};

use crate::domain::{LineCode, LineDefinition, LineTable, StationName};

use super::graph::{Connection, Network, Station};

/// Error from building a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A line definition is malformed
    #[error("invalid definition for line {line}: {reason}")]
    InvalidLineDefinition { line: LineCode, reason: String },
}

/// Mutable accumulator for stations and connections.
///
/// Stations and connections are kept in first-seen order. A connection
/// joined by more than one line keeps every line, in the order the lines
/// were added.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<(StationName, Vec<LineCode>)>,
    station_index: HashMap<StationName, usize>,
    /// (first station, second station, lines) in first-seen orientation.
    connections: Vec<(usize, usize, Vec<LineCode>)>,
    /// Keyed by (lower, higher) station index.
    connection_index: HashMap<(usize, usize), usize>,
    lines: Vec<LineDefinition>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the network.
    ///
    /// The line is validated before anything is recorded, so a rejected
    /// line leaves the builder unchanged.
    pub fn add_line(&mut self, line: &LineDefinition) -> Result<&mut Self, BuildError> {
        self.validate(line)?;

        let mut ids = Vec::with_capacity(line.stations.len());
        for station in &line.stations {
            let id = self.ensure_station(station);
            let serving = &mut self.stations[id].1;
            if !serving.contains(&line.code) {
                serving.push(line.code.clone());
            }
            ids.push(id);
        }

        for pair in ids.windows(2) {
            self.connect(pair[0], pair[1], &line.code);
        }

        debug!(
            line = %line.code,
            stations = line.stations.len(),
            "added line"
        );

        self.lines.push(line.clone());
        Ok(self)
    }

    /// Add every line of a table, in order.
    pub fn add_table(&mut self, table: &LineTable) -> Result<&mut Self, BuildError> {
        for line in table {
            self.add_line(line)?;
        }
        Ok(self)
    }

    /// Freeze the accumulated data into an immutable network.
    pub fn build(self) -> Network {
        let mut graph = UnGraph::with_capacity(self.stations.len(), self.connections.len());
        let mut index = HashMap::with_capacity(self.stations.len());

        let nodes: Vec<_> = self
            .stations
            .into_iter()
            .map(|(name, lines)| {
                let ix = graph.add_node(Station {
                    name: name.clone(),
                    lines,
                });
                index.insert(name, ix);
                ix
            })
            .collect();

        for (a, b, lines) in self.connections {
            let from = graph[nodes[a]].name.clone();
            let to = graph[nodes[b]].name.clone();
            graph.add_edge(nodes[a], nodes[b], Connection { from, to, lines });
        }

        info!(
            stations = graph.node_count(),
            connections = graph.edge_count(),
            lines = self.lines.len(),
            "network built"
        );

        Network::from_parts(graph, index, self.lines)
    }

    fn validate(&self, line: &LineDefinition) -> Result<(), BuildError> {
        let invalid = |reason: String| BuildError::InvalidLineDefinition {
            line: line.code.clone(),
            reason,
        };

        if self.lines.iter().any(|l| l.code == line.code) {
            return Err(invalid("line is defined more than once".to_string()));
        }

        if line.stations.is_empty() {
            return Err(invalid("line has no stations".to_string()));
        }

        if let Some(pair) = line.stations.windows(2).find(|w| w[0] == w[1]) {
            return Err(invalid(format!(
                "station {} is repeated consecutively",
                pair[0]
            )));
        }

        Ok(())
    }

    fn ensure_station(&mut self, name: &StationName) -> usize {
        if let Some(&id) = self.station_index.get(name) {
            return id;
        }
        let id = self.stations.len();
        self.stations.push((name.clone(), Vec::new()));
        self.station_index.insert(name.clone(), id);
        id
    }

    fn connect(&mut self, a: usize, b: usize, line: &LineCode) {
        let key = (a.min(b), a.max(b));
        match self.connection_index.get(&key) {
            Some(&existing) => {
                let lines = &mut self.connections[existing].2;
                if !lines.contains(line) {
                    debug!(
                        from = %self.stations[a].0,
                        to = %self.stations[b].0,
                        line = %line,
                        "connection shared by another line"
                    );
                    lines.push(line.clone());
                }
            }
            None => {
                self.connection_index.insert(key, self.connections.len());
                self.connections.push((a, b, vec![line.clone()]));
            }
        }
    }
}
