//! Chart rendering for the per-locality averages.

pub mod png;

pub use png::render_bar_chart;
