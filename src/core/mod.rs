//! Platform-agnostic core module - shared between WASM dashboard and CLI

pub mod data;
pub mod parser;
pub mod ranking;

pub use data::{Point, Standings, TableRow, FIELD_MAX, FIELD_MIN, SAMPLE_DATA_CSV};
pub use parser::{parse_csv, parse_json, ParseError, RawRow};
pub use ranking::{euclidean_distance, nearest_neighbor, nearest_to, rank, rank_points, MATCH_TOLERANCE};
