//! Lazy view loaders
//!
//! A [`Loader`] wraps an async factory that produces a view. The factory is not
//! called when the loader is created, only on the first [`Loader::load`]. A
//! successful result is cached and handed out on every later load; a failed one
//! is not, so the next load calls the factory again.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::OnceCell;
use tracing::trace;

use crate::error::LoadError;

type Factory<V> = dyn Fn() -> BoxFuture<'static, Result<V, LoadError>> + Send + Sync;

/// Deferred reference to a view
pub struct Loader<V> {
    factory: Arc<Factory<V>>,
    cell: Arc<OnceCell<V>>,
}

impl<V> Clone for Loader<V> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<V> Loader<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LoadError>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed()),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Loader for a value that is already available
    pub fn ready(value: V) -> Self {
        Self::new(move || {
            let value = value.clone();
            async move { Ok(value) }
        })
    }

    /// Whether a previous load succeeded
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Loads the view, calling the factory only if nothing is cached yet
    pub async fn load(&self) -> Result<V, LoadError> {
        if let Some(view) = self.cell.get() {
            trace!("view served from cache");
            return Ok(view.clone());
        }
        let view = self.cell.get_or_try_init(|| (self.factory)()).await?;
        Ok(view.clone())
    }
}

impl<V> fmt::Debug for Loader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("loaded", &self.cell.initialized())
            .finish()
    }
}
