//! Built-in line table for the Ankara metro.

use crate::domain::LineTable;

/// The bundled table, in the same format [`load_line_table`] reads.
///
/// [`load_line_table`]: crate::config::load_line_table
const ANKARA_JSON: &str = include_str!("../data/ankara.json");

/// The five Ankara metro and light rail lines.
pub fn ankara() -> LineTable {
    // Embedded at compile time and parsed by every test below
    serde_json::from_str(ANKARA_JSON).expect("bundled Ankara line table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lines_present_in_order() {
        let table = ankara();
        let codes: Vec<_> = table.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["M1", "M2", "M3", "M4", "A1"]);
    }

    #[test]
    fn station_counts() {
        let table = ankara();
        let counts: Vec<_> = table.iter().map(|l| l.stations.len()).collect();
        assert_eq!(counts, vec![9, 12, 15, 9, 11]);
    }

    #[test]
    fn colours() {
        let table = ankara();
        let colours: Vec<_> = table.iter().map(|l| l.color.as_str()).collect();
        assert_eq!(colours, vec!["red", "blue", "orange", "green", "purple"]);
    }

    #[test]
    fn termini() {
        let table = ankara();
        let m3 = &table.lines[2];
        assert_eq!(m3.stations.first().unwrap().as_str(), "HASTANE");
        assert_eq!(m3.stations.last().unwrap().as_str(), "OSB TÖREKENT");
    }
}
