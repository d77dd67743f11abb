//! Hover state and nearest-neighbor circles drawn over the scatter plot.
//!
//! Platform-agnostic: the dashboard turns these into egui_plot items, the
//! tests exercise them directly.

use tracing::trace;

use crate::core::{nearest_neighbor, Standings};

/// Which point, if any, the pointer is over (index into the standings)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    None,
    Point(usize),
}

impl HoverState {
    pub fn from_hit(hit: Option<usize>) -> Self {
        hit.map_or(HoverState::None, HoverState::Point)
    }

    pub fn index(self) -> Option<usize> {
        match self {
            HoverState::None => None,
            HoverState::Point(i) => Some(i),
        }
    }
}

/// Visual style of an overlay circle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayStyle {
    /// Always shown around the rank-1 point
    Winner,
    /// Shown around the hovered point
    Hovered,
}

/// A circle around a point reaching its nearest neighbor
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub center: [f64; 2],
    /// Radius in data units, equal to the nearest-neighbor distance
    pub radius: f64,
    pub style: OverlayStyle,
    pub label: String,
}

impl Overlay {
    fn around(standings: &Standings, index: usize, style: OverlayStyle) -> Option<Self> {
        let points = standings.points();
        let (_, distance) = nearest_neighbor(index, points)?;
        let point = &points[index];

        Some(Self {
            center: [point.x, point.y],
            radius: distance,
            style,
            label: format!("Distance to nearest: {:.1}", distance),
        })
    }

    /// Sample the circle as a closed polyline
    pub fn outline(&self, segments: usize) -> Vec<[f64; 2]> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64 * std::f64::consts::TAU;
                [
                    self.center[0] + self.radius * t.cos(),
                    self.center[1] + self.radius * t.sin(),
                ]
            })
            .collect()
    }

    /// Anchor for the distance label, just below the circle
    pub fn label_anchor(&self, offset: f64) -> [f64; 2] {
        [self.center[0], self.center[1] - self.radius - offset]
    }
}

/// Index of the point closest to `coord`, if within `tolerance`
///
/// The first point wins when several are equally close.
pub fn hit_test(standings: &Standings, coord: [f64; 2], tolerance: f64) -> Option<usize> {
    standings
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (i, ((p.x - coord[0]).powi(2) + (p.y - coord[1]).powi(2)).sqrt()))
        .filter(|&(_, d)| d <= tolerance)
        .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}

/// Circles to draw for the current hover state
///
/// The winner's circle is always present (when it has a neighbor); a
/// hovered point other than the winner adds its own circle.
pub fn overlays(standings: &Standings, hover: HoverState) -> Vec<Overlay> {
    let mut out = Vec::with_capacity(2);

    if !standings.is_empty() {
        out.extend(Overlay::around(standings, 0, OverlayStyle::Winner));
    }

    match hover {
        HoverState::Point(i) if i != 0 && i < standings.len() => {
            out.extend(Overlay::around(standings, i, OverlayStyle::Hovered));
        }
        HoverState::Point(i) if i >= standings.len() => {
            trace!(index = i, len = standings.len(), "Stale hover index ignored");
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_csv;

    fn standings(csv: &str) -> Standings {
        Standings::from_rows(&parse_csv(csv))
    }

    #[test]
    fn test_hover_state_from_hit() {
        assert_eq!(HoverState::from_hit(None), HoverState::None);
        assert_eq!(HoverState::from_hit(Some(2)), HoverState::Point(2));
        assert_eq!(HoverState::Point(2).index(), Some(2));
        assert_eq!(HoverState::default().index(), None);
    }

    #[test]
    fn test_winner_circle_always_drawn() {
        let s = standings("Name,X,Y\nA,0,0\nB,10,0\nC,10,1");
        let circles = overlays(&s, HoverState::None);
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].style, OverlayStyle::Winner);
        assert_eq!(circles[0].center, [0.0, 0.0]);
        assert!((circles[0].radius - 10.0).abs() < 1e-12);
        assert_eq!(circles[0].label, "Distance to nearest: 10.0");
    }

    #[test]
    fn test_hovering_winner_adds_nothing() {
        let s = standings("Name,X,Y\nA,0,0\nB,10,0\nC,10,1");
        assert_eq!(overlays(&s, HoverState::Point(0)).len(), 1);
    }

    #[test]
    fn test_hovered_point_circle() {
        let s = standings("Name,X,Y\nA,0,0\nB,10,0\nC,10,1");
        let circles = overlays(&s, HoverState::Point(2));
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[1].style, OverlayStyle::Hovered);
        assert_eq!(circles[1].center, [10.0, 1.0]);
        assert!((circles[1].radius - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stale_hover_ignored() {
        let s = standings("Name,X,Y\nA,0,0\nB,10,0");
        assert_eq!(overlays(&s, HoverState::Point(7)).len(), 1);
    }

    #[test]
    fn test_no_circles_without_neighbors() {
        assert!(overlays(&standings("Name,X,Y\nSolo,5,5"), HoverState::Point(0)).is_empty());
        assert!(overlays(&Standings::default(), HoverState::Point(0)).is_empty());
    }

    #[test]
    fn test_hit_test() {
        let s = standings("Name,X,Y\nA,0,0\nB,10,0\nC,10,1");
        // Ranked order is A, B, C
        assert_eq!(hit_test(&s, [0.4, 0.3], 1.0), Some(0));
        assert_eq!(hit_test(&s, [10.0, 0.6], 1.0), Some(2));
        assert_eq!(hit_test(&s, [10.0, 0.5], 1.0), Some(1));
        assert_eq!(hit_test(&s, [25.0, 25.0], 1.0), None);
    }

    #[test]
    fn test_outline_and_label_anchor() {
        let circle = Overlay {
            center: [5.0, 5.0],
            radius: 2.0,
            style: OverlayStyle::Winner,
            label: String::new(),
        };
        let outline = circle.outline(32);
        assert_eq!(outline.len(), 33);
        for [x, y] in &outline {
            let r = ((x - 5.0).powi(2) + (y - 5.0).powi(2)).sqrt();
            assert!((r - 2.0).abs() < 1e-9);
        }
        assert_eq!(circle.label_anchor(1.0), [5.0, 2.0]);
    }
}
