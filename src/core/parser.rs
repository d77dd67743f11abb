//! Input row parser for player datasets
//!
//! Accepts either spreadsheet-style CSV (header row, comma separated) or a
//! JSON array of objects. Both produce `RawRow`s keyed by column name.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{trace, warn};

use super::data::Point;

/// One input record, keyed by column name
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    fields: Map<String, Value>,
}

impl RawRow {
    /// Build a row from (column, value) string pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self { fields }
    }

    /// Look up a field, preferring the capitalized column name
    fn field(&self, capitalized: &str, lowercase: &str) -> Option<&Value> {
        [capitalized, lowercase]
            .into_iter()
            .filter_map(|key| self.fields.get(key))
            .find(|v| !is_blank(v))
    }

    /// Player name, if present and non-empty
    pub fn name(&self) -> Option<String> {
        match self.field("Name", "name")? {
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        }
    }

    /// X coordinate: 0 when absent or blank, None when not a number
    pub fn x(&self) -> Option<f64> {
        self.coordinate("X", "x")
    }

    /// Y coordinate: 0 when absent or blank, None when not a number
    pub fn y(&self) -> Option<f64> {
        self.coordinate("Y", "y")
    }

    fn coordinate(&self, capitalized: &str, lowercase: &str) -> Option<f64> {
        match self.field(capitalized, lowercase) {
            Some(value) => parse_coordinate(value),
            None => Some(0.0),
        }
    }

    /// Convert to an unranked point, or None if the row must be dropped
    ///
    /// `index` is the row's position in the input and names anonymous players.
    pub fn to_point(&self, index: usize) -> Option<Point> {
        let name = self
            .name()
            .unwrap_or_else(|| format!("Player {}", index + 1));

        let (Some(x), Some(y)) = (self.x(), self.y()) else {
            trace!(index, name = %name, "Dropping row with non-numeric coordinate");
            return None;
        };

        if !Point::in_bounds(x, y) {
            trace!(index, name = %name, x, y, "Dropping row outside the field");
            return None;
        }

        Some(Point::new(name, x, y))
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn parse_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse CSV text with a header row into raw rows
///
/// Fields are trimmed and may be quoted. Blank lines are skipped, missing
/// trailing fields are left absent and fields beyond the header are ignored.
/// Records the reader rejects are dropped with a warning.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.trim_start().as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!(error = %e, "Failed to read CSV header");
            return Vec::new();
        }
    };

    let rows: Vec<RawRow> = reader
        .records()
        .filter_map(|record| {
            record
                .map_err(|e| {
                    warn!(error = %e, "Skipping unreadable CSV record");
                })
                .ok()
        })
        .filter(|record| record.iter().any(|field| !field.is_empty()))
        .map(|record| RawRow::from_pairs(columns.iter().zip(record.iter())))
        .collect();

    trace!(columns = columns.len(), rows = rows.len(), "CSV parsed");
    rows
}

/// Error returned for malformed JSON datasets
#[derive(Debug)]
pub enum ParseError {
    Json(serde_json::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json(e) => write!(f, "invalid JSON dataset: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e)
    }
}

/// Parse a JSON array of objects into raw rows
pub fn parse_json(text: &str) -> Result<Vec<RawRow>, ParseError> {
    let rows: Vec<RawRow> = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Failed to parse JSON dataset");
        ParseError::from(e)
    })?;

    trace!(rows = rows.len(), "JSON parsed");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_header_and_rows() {
        let rows = parse_csv("Name,X,Y\nAmumu,45,47\nBard,5,8");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name().as_deref(), Some("Amumu"));
        assert_eq!(rows[0].x(), Some(45.0));
        assert_eq!(rows[1].y(), Some(8.0));
    }

    #[test]
    fn test_lowercase_columns() {
        let rows = parse_csv("name,x,y\nfizz,15,35");
        let point = rows[0].to_point(0).unwrap();
        assert_eq!(point.name, "fizz");
        assert_eq!((point.x, point.y), (15.0, 35.0));
    }

    #[test]
    fn test_capitalized_column_preferred() {
        let row = RawRow::from_pairs([("Name", "Upper"), ("name", "lower"), ("X", "1"), ("x", "2"), ("y", "3")]);
        let point = row.to_point(0).unwrap();
        assert_eq!(point.name, "Upper");
        assert_eq!(point.x, 1.0);
        assert_eq!(point.y, 3.0);
    }

    #[test]
    fn test_default_name_uses_row_index() {
        let rows = parse_csv("Name,X,Y\n,1,1\nB,2,2\n,3,3");
        assert_eq!(rows[0].to_point(0).unwrap().name, "Player 1");
        assert_eq!(rows[2].to_point(2).unwrap().name, "Player 3");

        let rows = parse_csv("X,Y\n4,4");
        assert_eq!(rows[0].to_point(0).unwrap().name, "Player 1");
    }

    #[test]
    fn test_whitespace_only_name_gets_default() {
        let rows = parse_json(r#"[{"Name": "   ", "X": 1, "Y": 1}]"#).unwrap();
        assert_eq!(rows[0].to_point(4).unwrap().name, "Player 5");

        let rows = parse_csv("Name,X,Y\n\"  \",2,2");
        assert_eq!(rows[0].to_point(0).unwrap().name, "Player 1");
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let rows = parse_csv("\n Name , X , Y \n\n  Ezreal , 48 , 3 \n   \n");
        assert_eq!(rows.len(), 1);
        let point = rows[0].to_point(0).unwrap();
        assert_eq!(point.name, "Ezreal");
        assert_eq!((point.x, point.y), (48.0, 3.0));
    }

    #[test]
    fn test_bad_coordinates_dropped() {
        let rows = parse_csv("Name,X,Y\nA,abc,1\nD,NaN,4\nE,inf,4\nF,50.0001,0\nG,12abc,3");
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().enumerate().all(|(i, r)| r.to_point(i).is_none()));
    }

    #[test]
    fn test_missing_coordinate_defaults_to_zero() {
        let rows = parse_csv("Name,X,Y\nA,10,\nB,1\nC,,4\nD,30,30");
        let points: Vec<Point> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.to_point(i))
            .collect();
        let coords: Vec<(&str, f64, f64)> = points
            .iter()
            .map(|p| (p.name.as_str(), p.x, p.y))
            .collect();
        assert_eq!(
            coords,
            vec![("A", 10.0, 0.0), ("B", 1.0, 0.0), ("C", 0.0, 4.0), ("D", 30.0, 30.0)]
        );

        let row = RawRow::from_pairs([("Name", "Lower"), ("X", ""), ("x", "7"), ("Y", "2")]);
        assert_eq!(row.x(), Some(7.0));
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let rows = parse_csv("Name,X,Y\n\"Smith, John\",10,20\nB,30,30");
        assert_eq!(rows.len(), 2);
        let point = rows[0].to_point(0).unwrap();
        assert_eq!(point.name, "Smith, John");
        assert_eq!((point.x, point.y), (10.0, 20.0));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let rows = parse_csv("Name,X,Y\nGangplank,38,12,extra");
        assert_eq!(rows[0].to_point(0).unwrap().y, 12.0);
    }

    #[test]
    fn test_parse_json_numbers_and_strings() {
        let text = r#"[
            {"Name": "Diana", "X": 2, "Y": 48},
            {"name": "Fizz", "x": "15", "y": " 35.5 "},
            {"X": 1.5, "Y": 2.5},
            {"Name": "Broken", "X": true, "Y": 1},
            {"Name": "Unplaced", "X": null}
        ]"#;
        let rows = parse_json(text).unwrap();
        assert_eq!(rows.len(), 5);

        let points: Vec<Point> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.to_point(i))
            .collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].name, "Diana");
        assert_eq!(points[1].y, 35.5);
        assert_eq!(points[2].name, "Player 3");
        assert_eq!((points[3].x, points[3].y), (0.0, 0.0));
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON dataset"));
        assert!(parse_json(r#"{"Name": "not an array"}"#).is_err());
    }
}
