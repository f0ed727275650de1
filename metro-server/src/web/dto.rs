//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Connection, Network, Station};
use crate::planner::{Instruction, Itinerary, Ride};

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Substring to search for
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A station and the lines serving it.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Codes of the lines serving this station
    pub lines: Vec<String>,

    /// Whether more than one line serves this station
    pub is_transfer: bool,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub from: String,

    /// End station name
    pub to: String,
}

/// A planned route with instructions.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Stations in travel order
    pub route: Vec<String>,

    /// Board, transfer and arrive steps
    pub instructions: Vec<InstructionResult>,

    /// Continuous rides on one line
    pub rides: Vec<RideResult>,

    /// Number of connections travelled
    pub hops: usize,

    /// Number of line changes
    pub transfers: usize,
}

/// One itinerary step.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InstructionResult {
    Board { line: String, station: String, text: String },
    Transfer { line: String, station: String, text: String },
    Arrive { station: String, text: String },
}

/// A ride on one line.
#[derive(Debug, Serialize)]
pub struct RideResult {
    pub line: String,
    pub color: String,
    pub from: String,
    pub to: String,
    pub hops: usize,
}

/// The network structure, for drawing maps.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub lines: Vec<LineResult>,
    pub stations: Vec<StationResult>,
    pub connections: Vec<ConnectionResult>,
}

/// A line with its display colour.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub code: String,
    pub color: String,
    pub stations: Vec<String>,
}

/// A connection between two adjacent stations.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,

    /// Every line running over this connection
    pub lines: Vec<String>,

    /// Display colour of each entry in `lines`
    pub colors: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a network station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.to_string(),
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            is_transfer: station.is_transfer(),
        }
    }
}

impl InstructionResult {
    /// Create from a planner instruction.
    pub fn from_instruction(instruction: &Instruction) -> Self {
        let text = instruction.to_string();
        match instruction {
            Instruction::Board { line, station } => InstructionResult::Board {
                line: line.to_string(),
                station: station.to_string(),
                text,
            },
            Instruction::Transfer { line, station } => InstructionResult::Transfer {
                line: line.to_string(),
                station: station.to_string(),
                text,
            },
            Instruction::Arrive { station } => InstructionResult::Arrive {
                station: station.to_string(),
                text,
            },
        }
    }
}

impl RideResult {
    /// Create from a planner ride, looking up the line colour.
    pub fn from_ride(ride: &Ride, network: &Network) -> Self {
        Self {
            line: ride.line.to_string(),
            color: network
                .line(&ride.line)
                .map(|l| l.color.clone())
                .unwrap_or_default(),
            from: ride.from.to_string(),
            to: ride.to.to_string(),
            hops: ride.hops,
        }
    }
}

impl ItineraryResult {
    /// Create from a planned itinerary.
    pub fn from_itinerary(itinerary: &Itinerary, network: &Network) -> Self {
        Self {
            route: itinerary
                .route
                .stations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            instructions: itinerary
                .instructions
                .iter()
                .map(InstructionResult::from_instruction)
                .collect(),
            rides: itinerary
                .rides
                .iter()
                .map(|r| RideResult::from_ride(r, network))
                .collect(),
            hops: itinerary.hops,
            transfers: itinerary.transfers(),
        }
    }
}

impl ConnectionResult {
    /// Create from a network connection.
    pub fn from_connection(connection: &Connection, network: &Network) -> Self {
        Self {
            from: connection.from.to_string(),
            to: connection.to.to_string(),
            lines: connection.lines.iter().map(|l| l.to_string()).collect(),
            colors: connection
                .lines
                .iter()
                .map(|l| {
                    network
                        .line(l)
                        .map(|def| def.color.clone())
                        .unwrap_or_default()
                })
                .collect(),
        }
    }
}

impl NetworkResponse {
    /// Create from the whole network.
    pub fn from_network(network: &Network) -> Self {
        Self {
            lines: network
                .lines()
                .iter()
                .map(|l| LineResult {
                    code: l.code.to_string(),
                    color: l.color.clone(),
                    stations: l.stations.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            stations: network.stations().map(StationResult::from_station).collect(),
            connections: network
                .connections()
                .map(|c| ConnectionResult::from_connection(c, network))
                .collect(),
        }
    }
}
