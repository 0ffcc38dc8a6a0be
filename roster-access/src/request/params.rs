//! Named single- and multi-value request parameters

use std::collections::HashMap;

/// Source of request parameters.
///
/// Implementations return `None` when the parameter is not part of the
/// request at all. A parameter may be present with an empty value list.
pub trait RequestParams {
    fn values(&self, name: &str) -> Option<&[String]>;

    /// First value of the parameter, or `None` if absent or empty
    fn first(&self, name: &str) -> Option<&str> {
        self.values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// In-memory parameter map preserving value order per name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    inner: HashMap<String, Vec<String>>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored and repeated keys accumulate in order.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.insert(name.into_owned(), value.into_owned());
        }
        params
    }

    /// Append a value for `name`
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(name.into()).or_default().push(value.into());
    }

    /// Builder-style variant of [`ParamMap::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set all values for `name`, replacing any existing ones.
    /// An empty vector leaves the parameter present with no values.
    pub fn set_values(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.inner.insert(name.into(), values);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl RequestParams for ParamMap {
    fn values(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }
}
