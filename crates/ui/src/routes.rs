//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{IndexPage, MainLayout, NotFoundPage};

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/", IndexPage)]
        Index {},
    #[end_layout]
    #[route("/:..segments", NotFoundPage)]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Name of the route table record this route renders, if it has one
    pub fn record_name(&self) -> Option<&'static str> {
        match self {
            Route::Index {} => Some("index"),
            Route::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::route_table;

    fn parse(path: &str) -> Option<Route> {
        path.parse::<Route>().ok()
    }

    #[test]
    fn root_parses_to_index() {
        assert_eq!(parse("/"), Some(Route::Index {}));
    }

    #[test]
    fn unknown_paths_parse_to_not_found() {
        assert_eq!(
            parse("/about"),
            Some(Route::NotFound {
                segments: vec!["about".to_string()]
            })
        );
        assert_eq!(
            parse("/a/b/c"),
            Some(Route::NotFound {
                segments: vec!["a".to_string(), "b".to_string(), "c".to_string()]
            })
        );
    }

    #[test]
    fn not_found_renders_its_path() {
        let route = Route::NotFound {
            segments: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(route.to_string(), "/a/b");
        assert_eq!(Route::Index {}.to_string(), "/");
    }

    #[test]
    fn router_and_table_agree() {
        let table = route_table().unwrap();
        for path in ["/", "/about", "/a/b/c", "/index"] {
            let route = parse(path).unwrap();
            let route_match = table.resolve(path).unwrap();
            assert_eq!(route.record_name(), route_match.record().name(), "{path}");
            assert_eq!(
                matches!(route, Route::NotFound { .. }),
                route_match.is_catch_all(),
                "{path}"
            );
        }
    }
}
