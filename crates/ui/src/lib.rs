//! UI library for the application shell
//! Contains the route table, the Dioxus routes and the view components

mod components;
mod routes;
mod styles;
mod views;

pub use components::App;
pub use routes::Route;
pub use styles::CUSTOM_STYLES;
pub use views::{route_table, View, CATCH_ALL_PATTERN};
