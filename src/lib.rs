//! chart-gesture: pan/zoom gesture engine for chart surfaces.
//!
//! Device input is normalized into a small gesture vocabulary, folded into a
//! uniform-scale-plus-translation view transform, and inverted again for
//! tooltip hit-testing. Widget toolkits stay outside: hosts implement
//! [`api::ChartHost`] and forward their native pointer events.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartHost, ChartView, GestureConfig};
pub use crate::core::{AffineTransform, Point};
pub use error::{GestureError, GestureResult};
