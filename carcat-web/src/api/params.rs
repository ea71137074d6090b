//! Request parameter lookup
//!
//! Form fields and query parameters are merged into one ordered list, body
//! fields first. A key lookup returns the first value seen, so repeated keys
//! never fail a request.

use axum::{extract::Query, Form};

/// Ordered request parameters, first value wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Body fields ahead of query parameters
    pub fn new(body: Vec<(String, String)>, query: Vec<(String, String)>) -> Self {
        let mut pairs = body;
        pairs.extend(query);
        Self(pairs)
    }

    /// Query parameters only
    pub fn from_query(Query(query): Query<Vec<(String, String)>>) -> Self {
        Self::new(Vec::new(), query)
    }

    /// Form body (absent when the body is not url-encoded) merged over the query
    pub fn from_form(
        form: Option<Form<Vec<(String, String)>>>,
        Query(query): Query<Vec<(String, String)>>,
    ) -> Self {
        let body = form.map(|Form(body)| body).unwrap_or_default();
        Self::new(body, query)
    }

    /// First value for `key`, or "" when absent
    pub fn first(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}
