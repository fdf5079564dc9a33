//! ATE Management Dashboard - Yew WASM Frontend
//!
//! This crate provides the web UI for the ATE management dashboard.

mod app;
mod components;
mod metrics;
mod pages;
mod tabs;

#[cfg(test)]
mod test_support;

pub use app::{App, Route, resolve};
pub use metrics::{MetricTile, metric_tiles};
pub use tabs::{DashboardTab, TabState};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
