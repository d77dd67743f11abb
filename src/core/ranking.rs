//! Nearest-neighbor ranking
//!
//! Every player is scored by the distance to its closest rival; the
//! player farthest from everyone else ranks first.

use tracing::{debug, trace};

use super::data::Point;
use super::parser::RawRow;

/// Tolerance used when matching a recomputed distance against a stored one
pub const MATCH_TOLERANCE: f64 = 1e-4;

/// Euclidean distance between two points on the field
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Parse, filter and rank raw input rows
///
/// Rows with an unparseable or out-of-field coordinate are dropped; an
/// absent coordinate counts as 0.
/// Never fails: empty input gives an empty list.
pub fn rank(rows: &[RawRow]) -> Vec<Point> {
    let points: Vec<Point> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| row.to_point(index))
        .collect();

    rank_points(points)
}

/// Compute nearest distances, sort descending (stable) and assign ranks
pub fn rank_points(mut points: Vec<Point>) -> Vec<Point> {
    let distances: Vec<f64> = (0..points.len())
        .map(|i| nearest_neighbor(i, &points).map_or(0.0, |(_, d)| d))
        .collect();

    for (point, distance) in points.iter_mut().zip(distances) {
        point.nearest_distance = distance;
    }

    // sort_by is stable, ties keep input order
    points.sort_by(|a, b| b.nearest_distance.total_cmp(&a.nearest_distance));

    for (position, point) in points.iter_mut().enumerate() {
        point.rank = position + 1;
    }

    if let Some(winner) = points.first() {
        debug!(
            count = points.len(),
            winner = %winner.name,
            distance = winner.nearest_distance,
            "Points ranked"
        );
    }

    points
}

/// Closest other point to `points[index]`
///
/// Returns the index of the first point at the minimum distance, or None
/// when `index` is out of range or there is no other point.
pub fn nearest_neighbor(index: usize, points: &[Point]) -> Option<(usize, f64)> {
    let point = points.get(index)?;

    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(j, other)| (j, euclidean_distance(point, other)))
        .fold(None, |best, (j, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((j, d)),
        })
}

/// Find the player that realizes the winner's nearest distance
///
/// `points` is the ranked list with the winner in the first slot. Scans the
/// remaining points in list order and returns the first one whose distance
/// to `winner` matches `winner.nearest_distance` within
/// [`MATCH_TOLERANCE`]. The returned distance is the stored one.
pub fn nearest_to<'a>(winner: &Point, points: &'a [Point]) -> Option<(&'a Point, f64)> {
    if points.len() < 2 {
        return None;
    }

    let found = points
        .iter()
        .skip(1)
        .find(|other| {
            (euclidean_distance(winner, other) - winner.nearest_distance).abs() < MATCH_TOLERANCE
        });

    if found.is_none() {
        trace!(winner = %winner.name, "No point matches winner distance");
    }

    found.map(|other| (other, winner.nearest_distance))
}
