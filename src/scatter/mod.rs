//! Scatter plot view model
//!
//! Hover tracking and the nearest-neighbor circles drawn over the players,
//! kept free of egui so the CLI and tests can use them.

mod overlay;

pub use overlay::{hit_test, overlays, HoverState, Overlay, OverlayStyle};
