//! Routes and ride instructions.
//!
//! An [`Itinerary`] turns a [`Route`] into the instructions a rider
//! follows: board a line, transfer where the line changes, arrive.

use std::fmt;

use crate::domain::{LineCode, StationName};
use crate::network::{Connection, Network};

use super::error::PlanError;

/// An ordered walk through the network, from start to end station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationName>,
}

impl Route {
    /// Create a route from stations in travel order.
    ///
    /// Adjacency is not checked here; [`build_itinerary`] rejects routes
    /// whose consecutive stations are not connected.
    pub fn new(stations: Vec<StationName>) -> Self {
        Self { stations }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Number of hops (connections travelled).
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&StationName> {
        self.stations.first()
    }

    pub fn end(&self) -> Option<&StationName> {
        self.stations.last()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The same walk in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut stations = self.stations.clone();
        stations.reverse();
        Self { stations }
    }
}

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Start riding `line` at `station`
    Board { line: LineCode, station: StationName },
    /// Change to `line` at `station`
    Transfer { line: LineCode, station: StationName },
    /// Journey ends at `station`
    Arrive { station: StationName },
}

impl Instruction {
    /// The station where this instruction applies.
    pub fn station(&self) -> &StationName {
        match self {
            Instruction::Board { station, .. }
            | Instruction::Transfer { station, .. }
            | Instruction::Arrive { station } => station,
        }
    }

    /// The line boarded by this instruction, if any.
    pub fn line(&self) -> Option<&LineCode> {
        match self {
            Instruction::Board { line, .. } | Instruction::Transfer { line, .. } => Some(line),
            Instruction::Arrive { .. } => None,
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Instruction::Transfer { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Board { line, station } => write!(f, "Take {line} line from {station}"),
            Instruction::Transfer { line, station } => {
                write!(f, "Transfer at {station} to {line} line")
            }
            Instruction::Arrive { station } => write!(f, "Arrive at {station}"),
        }
    }
}

/// A continuous ride on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    pub line: LineCode,
    pub from: StationName,
    pub to: StationName,
    pub hops: usize,
}

/// A route with its ride instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub route: Route,
    pub instructions: Vec<Instruction>,
    pub rides: Vec<Ride>,
    pub hops: usize,
}

impl Itinerary {
    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_transfer()).count()
    }

    /// Lines ridden, in order.
    pub fn lines_used(&self) -> Vec<&LineCode> {
        self.rides.iter().map(|r| &r.line).collect()
    }
}

/// Annotate a route with board, transfer and arrive instructions.
///
/// The active line is kept for as long as the next connection carries it.
/// When a line must be chosen, the one that covers the most consecutive
/// hops from that point is taken, with ties going to the line listed
/// first on the connection. On single-line connections this reduces to
/// following each connection's line tag.
///
/// # Errors
///
/// - [`PlanError::EmptyRoute`] for a route with no stations.
/// - [`PlanError::StationNotFound`] if a station is not in the network.
/// - [`PlanError::NotConnected`] if two consecutive stations are not adjacent.
pub fn build_itinerary(network: &Network, route: &Route) -> Result<Itinerary, PlanError> {
    let stations = route.stations();
    let Some(last) = stations.last() else {
        return Err(PlanError::EmptyRoute);
    };

    for station in stations {
        if !network.contains(station.as_str()) {
            return Err(PlanError::StationNotFound(station.to_string()));
        }
    }

    let connections = stations
        .windows(2)
        .map(|pair| {
            network
                .connection_between(pair[0].as_str(), pair[1].as_str())
                .ok_or_else(|| PlanError::NotConnected {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                })
        })
        .collect::<Result<Vec<&Connection>, _>>()?;

    let mut instructions = Vec::new();
    let mut rides: Vec<Ride> = Vec::new();
    let mut active: Option<&LineCode> = None;

    for (i, connection) in connections.iter().enumerate() {
        if active.is_some_and(|line| connection.carries(line)) {
            if let Some(ride) = rides.last_mut() {
                ride.to = stations[i + 1].clone();
                ride.hops += 1;
            }
            continue;
        }

        let line = choose_line(&connections[i..]);
        let station = stations[i].clone();
        instructions.push(match active {
            None => Instruction::Board {
                line: line.clone(),
                station: station.clone(),
            },
            Some(_) => Instruction::Transfer {
                line: line.clone(),
                station: station.clone(),
            },
        });
        rides.push(Ride {
            line: line.clone(),
            from: station,
            to: stations[i + 1].clone(),
            hops: 1,
        });
        active = Some(line);
    }

    instructions.push(Instruction::Arrive {
        station: last.clone(),
    });

    Ok(Itinerary {
        route: route.clone(),
        instructions,
        rides,
        hops: route.hops(),
    })
}

/// Pick the line on `ahead[0]` that runs furthest along `ahead`.
fn choose_line<'a>(ahead: &[&'a Connection]) -> &'a LineCode {
    let first = ahead[0];
    let mut best = first.primary_line();
    let mut best_run = 0;

    for line in &first.lines {
        let run = ahead.iter().take_while(|c| c.carries(line)).count();
        if run > best_run {
            best = line;
            best_run = run;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineDefinition, LineTable};

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    fn route(stations: &[&str]) -> Route {
        Route::new(stations.iter().map(|s| name(s)).collect())
    }

    fn network(lines: &[(&str, &[&str])]) -> Network {
        let table = LineTable::new(
            lines
                .iter()
                .map(|(c, stations)| {
                    LineDefinition::new(code(c), "black", stations.iter().map(|s| name(s)).collect())
                })
                .collect(),
        );
        Network::from_lines(&table).unwrap()
    }

    fn steps(itinerary: &Itinerary) -> Vec<String> {
        itinerary
            .instructions
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn single_station_route_only_arrives() {
        let network = network(&[("L1", &["A", "B"])]);
        let itinerary = build_itinerary(&network, &route(&["A"])).unwrap();

        assert_eq!(steps(&itinerary), vec!["Arrive at A"]);
        assert_eq!(itinerary.hops, 0);
        assert!(itinerary.rides.is_empty());
    }

    #[test]
    fn empty_route_rejected() {
        let network = network(&[("L1", &["A", "B"])]);
        assert_eq!(
            build_itinerary(&network, &Route::new(vec![])).unwrap_err(),
            PlanError::EmptyRoute
        );
    }

    #[test]
    fn one_line_ride() {
        let network = network(&[("L1", &["A", "B", "C"])]);
        let itinerary = build_itinerary(&network, &route(&["A", "B", "C"])).unwrap();

        assert_eq!(steps(&itinerary), vec!["Take L1 line from A", "Arrive at C"]);
        assert_eq!(itinerary.hops, 2);
        assert_eq!(itinerary.transfers(), 0);
        assert_eq!(
            itinerary.rides,
            vec![Ride {
                line: code("L1"),
                from: name("A"),
                to: name("C"),
                hops: 2,
            }]
        );
    }

    #[test]
    fn transfer_where_line_changes() {
        let network = network(&[("L1", &["A", "B"]), ("L2", &["B", "C", "D"])]);
        let itinerary = build_itinerary(&network, &route(&["A", "B", "C", "D"])).unwrap();

        assert_eq!(
            steps(&itinerary),
            vec![
                "Take L1 line from A",
                "Transfer at B to L2 line",
                "Arrive at D"
            ]
        );
        assert_eq!(itinerary.transfers(), 1);
        assert_eq!(itinerary.lines_used(), vec![&code("L1"), &code("L2")]);
    }

    #[test]
    fn shared_connection_keeps_active_line() {
        // B-C is served by both lines; riding L1 from A we stay on it to D
        let network = network(&[("L1", &["A", "B", "C", "D"]), ("L2", &["X", "B", "C"])]);
        let itinerary = build_itinerary(&network, &route(&["A", "B", "C", "D"])).unwrap();

        assert_eq!(steps(&itinerary), vec!["Take L1 line from A", "Arrive at D"]);
    }

    #[test]
    fn shared_connection_boards_longest_running_line() {
        // Starting on the shared B-C hop, L2 covers B-C-E while L1 only B-C
        let network = network(&[
            ("L1", &["A", "B", "C", "D"]),
            ("L2", &["X", "B", "C", "E"]),
        ]);
        let itinerary = build_itinerary(&network, &route(&["B", "C", "E"])).unwrap();

        assert_eq!(steps(&itinerary), vec!["Take L2 line from B", "Arrive at E"]);
    }

    #[test]
    fn shared_connection_tie_goes_to_first_line() {
        let network = network(&[("L1", &["A", "B"]), ("L2", &["A", "B"])]);
        let itinerary = build_itinerary(&network, &route(&["A", "B"])).unwrap();

        assert_eq!(steps(&itinerary), vec!["Take L1 line from A", "Arrive at B"]);
    }

    #[test]
    fn non_adjacent_stations_rejected() {
        let network = network(&[("L1", &["A", "B", "C"])]);
        let err = build_itinerary(&network, &route(&["A", "C"])).unwrap_err();
        assert_eq!(err.to_string(), "stations A and C are not connected");
    }

    #[test]
    fn unknown_station_in_route_rejected() {
        let network = network(&[("L1", &["A", "B"])]);
        let err = build_itinerary(&network, &route(&["A", "Z"])).unwrap_err();
        assert_eq!(err, PlanError::StationNotFound("Z".to_string()));
    }

    #[test]
    fn route_accessors() {
        let r = route(&["A", "B", "C"]);
        assert_eq!(r.hops(), 2);
        assert_eq!(r.start().unwrap().as_str(), "A");
        assert_eq!(r.end().unwrap().as_str(), "C");
        assert_eq!(r.reversed(), route(&["C", "B", "A"]));
        assert_eq!(Route::new(vec![]).hops(), 0);
    }
}
