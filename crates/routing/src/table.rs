//! The route table and path resolution

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::RoutingError;
use crate::params::Params;
use crate::path::{normalize_path, split_segments};
use crate::pattern::Pattern;
use crate::record::RouteRecord;

/// Immutable, ordered set of route records
///
/// Matching walks the top-level records in declaration order and returns the
/// first hit. Inside a record, children are tried before the record itself, so a
/// visit to a parent's own path lands on its empty-path default child.
pub struct RouteTable<V> {
    inner: Arc<Inner<V>>,
}

struct Inner<V> {
    records: Vec<RouteRecord<V>>,
    /// Flattened records in match order, each with its fully joined pattern
    entries: Vec<Entry>,
}

struct Entry {
    indices: Vec<usize>,
    pattern: Pattern,
}

impl<V> Clone for RouteTable<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> PartialEq for RouteTable<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.inner.entries.iter().map(|entry| entry.pattern.as_str()))
            .finish()
    }
}

impl<V> RouteTable<V> {
    /// Builds a table, checking that catch-alls come last and names are unique
    pub fn new(records: Vec<RouteRecord<V>>) -> Result<Self, RoutingError> {
        if let Some(record) = records.iter().find(|r| !r.pattern().is_absolute()) {
            return Err(RoutingError::invalid_pattern(
                record.pattern().as_str(),
                "top-level routes must start with '/'",
            ));
        }

        let mut entries = Vec::new();
        let mut names = HashSet::new();
        flatten(&records, None, &[], &mut entries, &mut names)?;
        check_catch_alls_last(&entries)?;

        Ok(Self {
            inner: Arc::new(Inner { records, entries }),
        })
    }

    /// Top-level records in declaration order
    pub fn records(&self) -> &[RouteRecord<V>] {
        &self.inner.records
    }

    /// Finds the first record matching `path`
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let normalized = normalize_path(path);
        let segments = split_segments(&normalized);

        let Some((entry, params)) = self.inner.entries.iter().find_map(|entry| {
            entry.pattern.matches(&segments).map(|params| (entry, params))
        }) else {
            debug!(path = %normalized, "no route matched");
            return None;
        };

        debug!(path = %normalized, pattern = %entry.pattern, "route resolved");
        Some(RouteMatch {
            matched: self.chain(&entry.indices),
            params,
            path: normalized.into_owned(),
        })
    }

    /// Records from the top level down to the one called `name`
    pub fn find_by_name(&self, name: &str) -> Option<Vec<&RouteRecord<V>>> {
        self.entry_named(name).map(|entry| self.chain(&entry.indices))
    }

    /// Path of the named route with `params` filled in
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RoutingError> {
        let entry = self
            .entry_named(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
        entry
            .pattern
            .build(params)
            .map_err(|param| RoutingError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    fn entry_named(&self, name: &str) -> Option<&Entry> {
        self.inner.entries.iter().find(|entry| {
            self.chain(&entry.indices)
                .last()
                .is_some_and(|record| record.name() == Some(name))
        })
    }

    fn chain(&self, indices: &[usize]) -> Vec<&RouteRecord<V>> {
        let mut chain = Vec::with_capacity(indices.len());
        let mut siblings = self.inner.records.as_slice();
        for &index in indices {
            let record = &siblings[index];
            chain.push(record);
            siblings = record.children();
        }
        chain
    }
}

fn flatten<V>(
    records: &[RouteRecord<V>],
    parent: Option<&Pattern>,
    prefix: &[usize],
    entries: &mut Vec<Entry>,
    names: &mut HashSet<String>,
) -> Result<(), RoutingError> {
    for (index, record) in records.iter().enumerate() {
        if let Some(name) = record.name() {
            if !names.insert(name.to_string()) {
                return Err(RoutingError::DuplicateName(name.to_string()));
            }
        }

        let pattern = match parent {
            Some(parent) => parent.join(record.pattern())?,
            None => record.pattern().clone(),
        };
        let mut indices = prefix.to_vec();
        indices.push(index);

        flatten(record.children(), Some(&pattern), &indices, entries, names)?;
        entries.push(Entry { indices, pattern });
    }
    Ok(())
}

/// A catch-all shadows every entry after it in match order, except its own
/// ancestors, which it only reaches through their paths.
fn check_catch_alls_last(entries: &[Entry]) -> Result<(), RoutingError> {
    for (position, entry) in entries.iter().enumerate() {
        if !entry.pattern.is_catch_all() {
            continue;
        }
        let shadowed = entries[position + 1..]
            .iter()
            .any(|later| !entry.indices.starts_with(&later.indices));
        if shadowed {
            return Err(RoutingError::CatchAllNotLast {
                pattern: entry.pattern.to_string(),
            });
        }
    }
    Ok(())
}

/// Result of resolving a path against a [`RouteTable`]
#[derive(Debug)]
pub struct RouteMatch<'t, V> {
    matched: Vec<&'t RouteRecord<V>>,
    params: Params,
    path: String,
}

impl<'t, V> RouteMatch<'t, V> {
    /// Matched records, outermost first
    pub fn matched(&self) -> &[&'t RouteRecord<V>] {
        &self.matched
    }

    /// The innermost matched record
    pub fn record(&self) -> &'t RouteRecord<V> {
        self.matched[self.matched.len() - 1]
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The normalized path that was matched
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_catch_all(&self) -> bool {
        self.record().is_catch_all()
    }
}

impl<V> RouteMatch<'_, V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Loads every matched view, parent before child
    pub async fn load(&self) -> Result<Vec<V>, RoutingError> {
        let mut views = Vec::with_capacity(self.matched.len());
        for record in &self.matched {
            views.push(record.load().await?);
        }
        Ok(views)
    }

    /// Loads the view at `depth` in the matched chain, if there is one
    pub async fn load_at(&self, depth: usize) -> Result<Option<V>, RoutingError> {
        match self.matched.get(depth) {
            Some(record) => record.load().await.map(Some),
            None => Ok(None),
        }
    }
}
