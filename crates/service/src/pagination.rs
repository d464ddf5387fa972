//! Offset pagination inputs and the paged result envelope.

use serde::Serialize;

use crate::errors::ServiceError;

/// Largest `limit`/`offset` a store accepts; SQL binds them as signed 64-bit.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Search text plus optional offset window, as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PageRequest {
    pub fn new() -> Self { Self::default() }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Search text, with the empty string treated as no search.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_paginated(&self) -> bool { self.limit.is_some() || self.offset.is_some() }

    /// Rejects a `limit` or `offset` above [`MAX_WINDOW`].
    pub fn check_window(&self) -> Result<(), ServiceError> {
        for (name, value) in [("limit", self.limit), ("offset", self.offset)] {
            if value.is_some_and(|n| n > MAX_WINDOW) {
                return Err(ServiceError::Validation(format!("{name} must not exceed {MAX_WINDOW}")));
            }
        }
        Ok(())
    }
}

/// One slice of a filtered, ordered set.
///
/// `total` counts the whole filtered set; `limit` and `offset` echo the request
/// and are left out of the serialized form when the caller omitted them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
