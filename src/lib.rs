//! thermograph: temperature time-series graph geometry and rendering.
//!
//! This crate turns a series of timestamped temperature samples into a
//! deterministic set of draw primitives: day/night shade bands, adaptive
//! axis ticks, and a smooth Hermite-derived Bezier curve through the
//! samples, all laid out for a fixed pixel viewport.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphEngine, GraphEngineConfig};
pub use error::{GraphError, GraphResult};
