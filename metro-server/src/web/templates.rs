//! Askama templates for the web frontend.

use askama::Template;

use crate::network::Network;
use crate::planner::{Instruction, Itinerary};
use crate::stats::NetworkStats;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form and line legend.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<String>,
    pub lines: Vec<LineView>,
    pub transfers: Vec<String>,
    pub station_count: usize,
    pub connection_count: usize,
}

/// Route result page.
#[derive(Template)]
#[template(path = "route.html")]
pub struct RouteTemplate {
    pub route: RouteView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Line legend entry.
#[derive(Debug, Clone)]
pub struct LineView {
    pub code: String,
    pub color: String,
    pub first: String,
    pub last: String,
}

impl IndexTemplate {
    /// Create from the network and its statistics.
    pub fn from_network(network: &Network, stats: &NetworkStats) -> Self {
        let lines = network
            .lines()
            .iter()
            .map(|l| LineView {
                code: l.code.to_string(),
                color: l.color.clone(),
                first: l.stations.first().map(|s| s.to_string()).unwrap_or_default(),
                last: l.stations.last().map(|s| s.to_string()).unwrap_or_default(),
            })
            .collect();

        Self {
            stations: network.stations().map(|s| s.name.to_string()).collect(),
            lines,
            transfers: stats.transfer_stations.clone(),
            station_count: stats.stations,
            connection_count: stats.connections,
        }
    }
}

/// Itinerary view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub from: String,
    pub to: String,
    pub hops: usize,
    pub transfers: usize,
    pub steps: Vec<StepView>,
    pub stations: Vec<String>,
}

impl RouteView {
    /// Create from a planned itinerary.
    pub fn from_itinerary(itinerary: &Itinerary, network: &Network) -> Self {
        let stations: Vec<String> = itinerary
            .route
            .stations()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let steps = itinerary
            .instructions
            .iter()
            .map(|i| StepView::from_instruction(i, network))
            .collect();

        Self {
            from: stations.first().cloned().unwrap_or_default(),
            to: stations.last().cloned().unwrap_or_default(),
            hops: itinerary.hops,
            transfers: itinerary.transfers(),
            steps,
            stations,
        }
    }

    /// Summary line, e.g. "10 stops, 1 change".
    pub fn summary(&self) -> String {
        let stops = match self.hops {
            1 => "1 stop".to_string(),
            n => format!("{n} stops"),
        };
        match self.transfers {
            0 => format!("{stops}, no changes"),
            1 => format!("{stops}, 1 change"),
            n => format!("{stops}, {n} changes"),
        }
    }
}

/// One step of an itinerary.
#[derive(Debug, Clone)]
pub struct StepView {
    /// "board", "transfer" or "arrive", used as a CSS class
    pub kind: &'static str,
    pub text: String,
    /// Line colour, empty for arrival
    pub color: String,
}

impl StepView {
    /// Create from a planner instruction.
    pub fn from_instruction(instruction: &Instruction, network: &Network) -> Self {
        let kind = match instruction {
            Instruction::Board { .. } => "board",
            Instruction::Transfer { .. } => "transfer",
            Instruction::Arrive { .. } => "arrive",
        };
        let color = instruction
            .line()
            .and_then(|code| network.line(code))
            .map(|l| l.color.clone())
            .unwrap_or_default();

        Self {
            kind,
            text: instruction.to_string(),
            color,
        }
    }
}
