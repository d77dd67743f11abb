//! Data structures for the ranked player set
//!
//! These structures are platform-agnostic (no WASM deps) and shared
//! between the CLI and dashboard.

use serde::Serialize;
use tracing::debug;

use super::parser::RawRow;
use super::ranking;

/// Lower bound of the playing field (inclusive, both axes)
pub const FIELD_MIN: f64 = 0.0;
/// Upper bound of the playing field (inclusive, both axes)
pub const FIELD_MAX: f64 = 50.0;

/// Inline sample dataset, loaded on startup
pub const SAMPLE_DATA_CSV: &str = "Name,X,Y
Amumu,45,47
Bard,5,8
Chogath,25,25
Diana,2,48
Ezreal,48,3
Fizz,15,35
Gangplank,38,12";

/// A named player on the field, decorated with its ranking
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Distance to the closest other player (0 when alone)
    pub nearest_distance: f64,
    /// 1-based position after sorting, 1 = most isolated
    pub rank: usize,
}

impl Point {
    /// Create an unranked point
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            nearest_distance: 0.0,
            rank: 0,
        }
    }

    /// Whether both coordinates lie on the field
    pub fn in_bounds(x: f64, y: f64) -> bool {
        (FIELD_MIN..=FIELD_MAX).contains(&x) && (FIELD_MIN..=FIELD_MAX).contains(&y)
    }

    /// Tooltip text shown when hovering the point on the chart
    pub fn tooltip_lines(&self) -> [String; 3] {
        [
            self.name.clone(),
            format!("Position: ({}, {})", self.x, self.y),
            format!("Distance to nearest: {:.2}", self.nearest_distance),
        ]
    }
}

/// One row of the standings table
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub rank: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub nearest: String,
}

/// The ranked point set for one loaded dataset
///
/// Built once per load and handed to the rendering layer by value.
/// Loading a new dataset builds a new `Standings`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Standings {
    points: Vec<Point>,
}

impl Standings {
    /// Rank raw input rows
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let points = ranking::rank(rows);
        debug!(rows = rows.len(), retained = points.len(), "Standings built");
        Self { points }
    }

    /// Points sorted by rank
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most isolated player (rank 1)
    pub fn winner(&self) -> Option<&Point> {
        self.points.first()
    }

    /// The player realizing the winner's nearest distance
    pub fn winner_rival(&self) -> Option<(&Point, f64)> {
        ranking::nearest_to(self.winner()?, &self.points)
    }

    /// Rows for the standings table, in rank order
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.points
            .iter()
            .map(|p| TableRow {
                rank: p.rank,
                name: p.name.clone(),
                x: p.x,
                y: p.y,
                nearest: format!("{:.2}", p.nearest_distance),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_csv;

    #[test]
    fn test_sample_data_winner() {
        let standings = Standings::from_rows(&parse_csv(SAMPLE_DATA_CSV));
        assert_eq!(standings.len(), 7);

        let names: Vec<&str> = standings.points().iter().map(|p| p.name.as_str()).collect();
        // Chogath/Fizz and Ezreal/Gangplank tie and keep input order
        assert_eq!(
            names,
            vec!["Amumu", "Bard", "Diana", "Chogath", "Fizz", "Ezreal", "Gangplank"]
        );

        let winner = standings.winner().unwrap();
        assert_eq!(winner.rank, 1);
        assert!((winner.nearest_distance - 29.732137).abs() < 1e-4);

        let (rival, distance) = standings.winner_rival().unwrap();
        assert_eq!(rival.name, "Chogath");
        assert_eq!(distance, winner.nearest_distance);
    }

    #[test]
    fn test_empty_standings() {
        let standings = Standings::from_rows(&[]);
        assert!(standings.is_empty());
        assert!(standings.winner().is_none());
        assert!(standings.winner_rival().is_none());
        assert!(standings.table_rows().is_empty());
    }

    #[test]
    fn test_table_rows_format() {
        let standings = Standings::from_rows(&parse_csv("Name,X,Y\nA,0,0\nB,3,4"));
        let rows = standings.table_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[0].nearest, "5.00");
        assert_eq!(rows[1].name, "B");
    }

    #[test]
    fn test_tooltip_lines() {
        let mut p = Point::new("Fizz", 15.0, 35.5);
        p.nearest_distance = 14.142135;
        let lines = p.tooltip_lines();
        assert_eq!(lines[0], "Fizz");
        assert_eq!(lines[1], "Position: (15, 35.5)");
        assert_eq!(lines[2], "Distance to nearest: 14.14");
    }

    #[test]
    fn test_serialized_field_names() {
        let standings = Standings::from_rows(&parse_csv("Name,X,Y\nSolo,1,2"));
        let json = serde_json::to_value(&standings).unwrap();
        assert_eq!(json[0]["name"], "Solo");
        assert_eq!(json[0]["nearestDistance"], 0.0);
        assert_eq!(json[0]["rank"], 1);
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(Point::in_bounds(0.0, 50.0));
        assert!(!Point::in_bounds(-0.1, 10.0));
        assert!(!Point::in_bounds(10.0, 50.1));
        assert!(!Point::in_bounds(f64::NAN, 10.0));
    }
}
