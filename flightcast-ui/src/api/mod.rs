//! HTTP API handlers for flightcast-ui

pub mod forecast;
pub mod health;
pub mod history;
pub mod meta;
pub mod ui;

pub use forecast::submit_forecast;
pub use health::health_routes;
pub use history::{export_history, get_history, get_series, reset_history};
pub use meta::get_meta;
pub use ui::{serve_app_js, serve_index};
