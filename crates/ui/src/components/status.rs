//! Lazy view loading hook and its placeholder components

use std::error::Error;

use dioxus::prelude::*;
use routing::{RouteTable, RoutingError};

use crate::routes::Route;
use crate::views::View;

/// Loads the view at `depth` of the current route's match
///
/// The route table is read from context; `None` there means it failed to build.
pub fn use_view(depth: usize) -> Resource<Result<View, String>> {
    let table = use_context::<Option<RouteTable<View>>>();
    let route: Route = use_route();
    let path = route.to_string();

    // Re-run whenever the path changes while the component stays mounted
    use_resource(use_reactive((&path,), move |(path,)| {
        load_view(table.clone(), path, depth)
    }))
}

async fn load_view(
    table: Option<RouteTable<View>>,
    path: String,
    depth: usize,
) -> Result<View, String> {
    let Some(table) = table else {
        return Err("route table unavailable".to_string());
    };
    let Some(route_match) = table.resolve(&path) else {
        return Err(format!("no route matches {path}"));
    };
    match route_match.load_at(depth).await {
        Ok(Some(view)) => Ok(view),
        Ok(None) => Err(format!("{path} has no view at depth {depth}")),
        Err(err) => Err(describe(&err)),
    }
}

fn describe(err: &RoutingError) -> String {
    match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

/// Placeholder shown while a view is loading
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "status", "Loading…" }
    }
}

/// Shown in place of a view that could not be loaded
#[component]
pub fn LoadFailed(message: String) -> Element {
    rsx! {
        div { class: "status status-error", "⚠ {message}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routing::{LoadError, Loader, RouteRecord};

    use crate::views::route_table;

    #[tokio::test]
    async fn missing_table_is_reported() {
        let err = load_view(None, "/".to_string(), 0).await.unwrap_err();
        assert_eq!(err, "route table unavailable");
    }

    #[tokio::test]
    async fn loads_each_segment_of_the_root() {
        let table = route_table().unwrap();
        assert_eq!(
            load_view(Some(table.clone()), "/".to_string(), 0).await,
            Ok(View::MainLayout)
        );
        assert_eq!(
            load_view(Some(table), "/".to_string(), 1).await,
            Ok(View::IndexPage)
        );
    }

    #[tokio::test]
    async fn different_unknown_paths_load_not_found() {
        let table = route_table().unwrap();
        for path in ["/about", "/a/b/c"] {
            assert_eq!(
                load_view(Some(table.clone()), path.to_string(), 0).await,
                Ok(View::NotFound)
            );
        }
    }

    #[tokio::test]
    async fn depth_beyond_match_is_reported() {
        let table = route_table().unwrap();
        let err = load_view(Some(table), "/".to_string(), 2).await.unwrap_err();
        assert_eq!(err, "/ has no view at depth 2");
    }

    #[tokio::test]
    async fn loader_failure_includes_its_cause() {
        let table = RouteTable::new(vec![RouteRecord::new(
            "/",
            Loader::new(|| async { Err::<View, _>(LoadError::new("chunk missing")) }),
        )
        .unwrap()])
        .unwrap();

        let err = load_view(Some(table), "/".to_string(), 0).await.unwrap_err();
        assert_eq!(err, "failed to load view for `/`: chunk missing");
    }

    #[tokio::test]
    async fn unmatched_path_is_reported() {
        let table = RouteTable::new(vec![
            RouteRecord::new("/", Loader::ready(View::MainLayout)).unwrap(),
        ])
        .unwrap();
        let err = load_view(Some(table), "/about".to_string(), 0).await.unwrap_err();
        assert_eq!(err, "no route matches /about");
    }
}
