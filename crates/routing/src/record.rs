//! Route records

use tracing::{debug, warn};

use crate::error::RoutingError;
use crate::loader::Loader;
use crate::pattern::Pattern;

/// A URL pattern bound to a lazily loaded view, with optional nested children
#[derive(Debug)]
pub struct RouteRecord<V> {
    pattern: Pattern,
    name: Option<String>,
    loader: Loader<V>,
    children: Vec<RouteRecord<V>>,
}

impl<V> RouteRecord<V> {
    pub fn new(pattern: &str, loader: Loader<V>) -> Result<Self, RoutingError> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: None,
            loader,
            children: Vec::new(),
        })
    }

    /// Names the record for programmatic navigation
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a child; children match in insertion order
    pub fn with_child(mut self, child: RouteRecord<V>) -> Self {
        self.children.push(child);
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn loader(&self) -> &Loader<V> {
        &self.loader
    }

    pub fn children(&self) -> &[RouteRecord<V>] {
        &self.children
    }

    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_catch_all()
    }
}

impl<V> RouteRecord<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Loads this record's view
    pub async fn load(&self) -> Result<V, RoutingError> {
        debug!(pattern = %self.pattern, loaded = self.loader.is_loaded(), "loading view");
        self.loader.load().await.map_err(|source| {
            warn!(pattern = %self.pattern, error = source.message(), "view failed to load");
            RoutingError::Load {
                pattern: self.pattern.to_string(),
                source,
            }
        })
    }
}
