//! Parameters captured from a matched path

use std::collections::BTreeMap;

/// Value of a single captured parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// `:name` or `:name?`
    Single(String),
    /// `:name*` or `:name+`, one entry per path segment
    Repeated(Vec<String>),
}

impl ParamValue {
    /// Path segments this value expands to
    pub fn segments(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(value) => vec![value.as_str()],
            ParamValue::Repeated(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Named parameters, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    /// Builder form of [`Params::insert`] for a single value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ParamValue::Single(value.into()));
        self
    }

    /// Builder form of [`Params::insert`] for a repeated value
    pub fn with_repeated<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(name, ParamValue::Repeated(values));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// The value of a single parameter, `None` for missing or repeated ones
    pub fn get_one(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(ParamValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
