//! HTTP API handlers for carcat-web

pub mod buildinfo;
pub mod health;
pub mod params;
pub mod views;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use params::FormValues;
pub use views::{compare, compare_method_not_allowed, home, search};
