//! Demora - histogram analyzer for batched JSON timing results
//!
//! This library provides the core pipeline for loading benchmark result
//! files, filtering successful records, bucketing their timings into
//! fixed-width histogram bins, and reporting the series as a text table,
//! JSON document, CSV, or a rendered SVG bar chart.

pub mod chart;
pub mod cli;
pub mod csv_output;
pub mod histogram;
pub mod json_output;
pub mod loader;
pub mod record;
pub mod report;
pub mod stats;
