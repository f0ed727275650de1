//! Domain types for the metro route planner.
//!
//! Station names and line codes are validated at construction, so
//! code that receives these types can trust them.

mod line;
mod station;

pub use line::{InvalidLineCode, LineCode, LineDefinition, LineTable};
pub use station::{InvalidStationName, StationName};
