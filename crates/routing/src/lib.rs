//! Client-side route table
//!
//! Declares navigation routes as an ordered tree of [`RouteRecord`]s, resolves
//! paths against them and loads the matched views on demand.

mod error;
mod loader;
mod params;
pub mod path;
pub mod pattern;
mod record;
mod table;

pub use error::{LoadError, RoutingError};
pub use loader::Loader;
pub use params::{ParamValue, Params};
pub use pattern::{Pattern, Segment};
pub use record::RouteRecord;
pub use table::{RouteMatch, RouteTable};
