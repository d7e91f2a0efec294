//! Resource path and query string builders.
//!
//! Endpoint callers describe a path as a list of segments plus optional query
//! parameters. Rendering percent-encodes every segment so identifiers such as
//! region slugs or backup service names are always URL-segment-safe.

use std::collections::BTreeMap;
use std::fmt::Display;
use url::Url;

use crate::error::{Error, Result};

const RENDER_ROOT: &str = "http://localhost/";

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Append using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: &str, value: Option<T>, mut map: F)
    where
        F: FnMut(T) -> String,
    {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), map(value)));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append every pair from another builder.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Borrow the collected key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Generic options accepted by list and get endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GetOptions {
    /// Restrict the returned fields.
    pub fields: Vec<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Number of items to skip.
    pub offset: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Resource type filter.
    pub kind: Option<String>,
    /// Resource status filter.
    pub status: Option<String>,
    /// Additional raw query parameters.
    pub extra: BTreeMap<String, String>,
}

impl GetOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned fields.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filter by free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by resource type.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Filter by resource status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Add a raw query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Convert the options into query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        params.push_opt_with(
            "fields",
            Some(&self.fields).filter(|fields| !fields.is_empty()),
            |fields| fields.join(","),
        );
        params.push_opt("limit", self.limit);
        params.push_opt("offset", self.offset);
        params.push_opt("search", self.search.as_deref());
        params.push_opt("type", self.kind.as_deref());
        params.push_opt("status", self.status.as_deref());

        for (key, value) in &self.extra {
            params.push(key, value);
        }

        params
    }
}

/// A resource path made of raw segments and query parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
    query: QueryParams,
}

impl ResourcePath {
    /// Start a path from a slash separated prefix such as `v1/servers`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            segments: prefix
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(ToString::to_string)
                .collect(),
            query: QueryParams::new(),
        }
    }

    /// Append one segment, encoded on render.
    #[must_use]
    pub fn segment(mut self, segment: impl Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append query parameters.
    #[must_use]
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query.extend(params);
        self
    }

    /// Append query parameters derived from [`GetOptions`], if any.
    #[must_use]
    pub fn options(self, options: Option<&GetOptions>) -> Self {
        match options {
            Some(options) => self.query(options.to_params()),
            None => self,
        }
    }

    /// Render an absolute path with its query string, e.g. `/v1/servers/1?fields=power`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the segments cannot form a path.
    pub fn render(&self) -> Result<String> {
        let mut url = Url::parse(RENDER_ROOT)?;

        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint("path cannot take segments".to_string()))?
            .clear()
            .extend(&self.segments);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.pairs());
        }

        let mut rendered = url.path().to_string();
        if let Some(query) = url.query() {
            rendered.push('?');
            rendered.push_str(query);
        }

        Ok(rendered)
    }
}
