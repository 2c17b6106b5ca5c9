#![forbid(unsafe_code)]

//! `framefit-dashboard` holds the declarative content of the embedded
//! payments-industry dashboards: the hand-authored survey statistics
//! with their citations, the brand palette, and the chart definitions
//! the page's charting library consumes as JSON.
//!
//! This crate renders nothing and fetches nothing; the embed page wires
//! [`chart::dashboard_charts`] to canvases and reports its resulting
//! content height through `framefit-web`.

pub mod chart;
pub mod data;
pub mod palette;

pub use chart::{ChartKind, ChartSpec, ValueFormat, dashboard_charts};
