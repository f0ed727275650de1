//! The immutable metro network.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::domain::{LineCode, LineDefinition, LineTable, StationName};

use super::builder::{BuildError, NetworkBuilder};

/// A station and the lines serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: StationName,
    /// Serving lines in the order they were added, without duplicates.
    pub lines: Vec<LineCode>,
}

impl Station {
    /// A transfer station is served by two or more lines.
    pub fn is_transfer(&self) -> bool {
        self.lines.len() > 1
    }

    /// Returns true if `line` serves this station.
    pub fn is_served_by(&self, line: &LineCode) -> bool {
        self.lines.contains(line)
    }
}

/// A connection between two stations that are consecutive on some line.
///
/// `from` and `to` follow the direction of the first line that created
/// the connection; the connection itself is undirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: StationName,
    pub to: StationName,
    /// Every line joining this pair, in the order the lines were added.
    pub lines: Vec<LineCode>,
}

impl Connection {
    /// Returns true if `line` runs over this connection.
    pub fn carries(&self, line: &LineCode) -> bool {
        self.lines.contains(line)
    }

    /// The line that created this connection.
    pub fn primary_line(&self) -> &LineCode {
        // The builder never creates a connection without a line
        &self.lines[0]
    }
}

/// The metro network: stations as nodes, connections as edges.
///
/// A `Network` is built once and never mutated afterwards. It can be
/// shared between any number of readers, for example behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Network {
    graph: UnGraph<Station, Connection>,
    index: HashMap<StationName, NodeIndex>,
    lines: Vec<LineDefinition>,
}

impl Network {
    /// Build a network from a table of line definitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::network::Network;
    ///
    /// let network = Network::from_lines(&metro_server::lines::ankara()).unwrap();
    /// assert!(network.station("KIZILAY").unwrap().is_transfer());
    /// ```
    pub fn from_lines(table: &LineTable) -> Result<Self, BuildError> {
        let mut builder = NetworkBuilder::new();
        builder.add_table(table)?;
        Ok(builder.build())
    }

    pub(super) fn from_parts(
        graph: UnGraph<Station, Connection>,
        index: HashMap<StationName, NodeIndex>,
        lines: Vec<LineDefinition>,
    ) -> Self {
        Self {
            graph,
            index,
            lines,
        }
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of connections. Station pairs shared by several lines count once.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All stations, in the order they were first seen.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.graph.node_indices().map(move |ix| &self.graph[ix])
    }

    /// All connections, in the order they were first created.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.graph.edge_indices().map(move |e| &self.graph[e])
    }

    /// Stations served by more than one line.
    pub fn transfer_stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations().filter(|s| s.is_transfer())
    }

    /// Line definitions in the order they were added.
    pub fn lines(&self) -> &[LineDefinition] {
        &self.lines
    }

    /// Look up a line by its code.
    pub fn line(&self, code: &LineCode) -> Option<&LineDefinition> {
        self.lines.iter().find(|l| &l.code == code)
    }

    /// Look up a station by its exact name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.node(name).map(|ix| &self.graph[ix])
    }

    /// Returns true if the network has a station with this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// The connection between two stations, in either direction.
    pub fn connection_between(&self, a: &str, b: &str) -> Option<&Connection> {
        let (a, b) = (self.node(a)?, self.node(b)?);
        self.graph.find_edge(a, b).map(|e| &self.graph[e])
    }

    /// Stations adjacent to `name`, in first-seen order.
    ///
    /// Returns `None` if the station does not exist.
    pub fn neighbors(&self, name: &str) -> Option<Vec<&Station>> {
        let ix = self.node(name)?;
        Some(
            self.neighbor_nodes(ix)
                .into_iter()
                .map(|n| &self.graph[n])
                .collect(),
        )
    }

    /// Map user input to a station name.
    ///
    /// An exact match (after trimming) wins. Otherwise a case-insensitive
    /// match is accepted if exactly one station matches. Turkish dotted
    /// and dotless i compare equal to ASCII `i`, so "ostim" finds OSTİM.
    pub fn resolve(&self, query: &str) -> Option<&StationName> {
        let query = query.trim();
        if let Some(station) = self.station(query) {
            return Some(&station.name);
        }

        let folded = fold_name(query);
        let mut matches = self
            .stations()
            .filter(|s| fold_name(s.name.as_str()) == folded);
        match (matches.next(), matches.next()) {
            (Some(station), None) => Some(&station.name),
            _ => None,
        }
    }

    /// Case-insensitive substring search over station names.
    ///
    /// Results are in first-seen order, at most `limit` of them.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let folded = fold_name(query.trim());
        if folded.is_empty() {
            return Vec::new();
        }
        self.stations()
            .filter(|s| fold_name(s.name.as_str()).contains(&folded))
            .take(limit)
            .collect()
    }

    pub(crate) fn node(&self, name: &str) -> Option<NodeIndex> {
        // Names are stored trimmed; lookups trim the same way
        StationName::parse(name)
            .ok()
            .and_then(|n| self.index.get(&n).copied())
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn station_at(&self, ix: NodeIndex) -> &Station {
        &self.graph[ix]
    }

    pub(crate) fn connection_at(&self, a: NodeIndex, b: NodeIndex) -> Option<&Connection> {
        self.graph.find_edge(a, b).map(|e| &self.graph[e])
    }

    /// Neighbours in ascending node index order, i.e. first-seen order.
    pub(crate) fn neighbor_nodes(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.neighbors(ix).collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }
}

/// Fold a station name for case-insensitive comparison.
///
/// `str::to_lowercase` turns `İ` into `i` plus U+0307 and leaves `ı`
/// alone, so both are mapped to plain `i` first.
fn fold_name(name: &str) -> String {
    name.chars()
        .flat_map(|c| match c {
            'İ' | 'I' | 'ı' => 'i'.to_lowercase(),
            c => c.to_lowercase(),
        })
        .filter(|&c| c != '\u{307}')
        .collect()
}
