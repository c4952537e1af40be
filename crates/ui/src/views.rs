//! Lazily loaded views and the route table that binds them to paths

use routing::{Loader, RouteRecord, RouteTable, RoutingError};
use tracing::debug;

/// Pattern of the fallback record; matches any path, including nested ones
pub const CATCH_ALL_PATTERN: &str = "/:catchAll(.*)*";

/// View modules the table can load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    MainLayout,
    IndexPage,
    NotFound,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::MainLayout => "SPA Shell",
            View::IndexPage => "Welcome",
            View::NotFound => "Nothing lives at this address.",
        }
    }
}

fn lazy(view: View) -> Loader<View> {
    Loader::new(move || async move {
        debug!(?view, "view module loaded");
        Ok(view)
    })
}

/// Builds the application's route table
///
/// The root renders the main layout with `index` as its default child; every
/// other path falls through to the not-found view.
pub fn route_table() -> Result<RouteTable<View>, RoutingError> {
    RouteTable::new(vec![
        RouteRecord::new("/", lazy(View::MainLayout))?
            .with_child(RouteRecord::new("", lazy(View::IndexPage))?.named("index")),
        RouteRecord::new(CATCH_ALL_PATTERN, lazy(View::NotFound))?,
    ])
}
