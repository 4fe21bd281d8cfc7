//! Chart Rendering
//!
//! Turns ideal and actual progress series into a two-series SVG chart.

#![warn(missing_docs)]

pub mod renderer;

pub use renderer::{ChartConfig, ChartError, ChartRenderer, RenderedChart};
