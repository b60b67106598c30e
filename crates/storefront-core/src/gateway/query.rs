//! Product Listing Query

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same reserved set as `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parameters of `GET /products`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub per_page: u32,
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            category: None,
        }
    }

    /// Blank categories are dropped
    pub fn with_category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = (!category.is_empty()).then(|| category.to_string());
        self
    }

    /// `?per_page=N[&category=C]`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("?per_page={}", self.per_page);
        if let Some(category) = &self.category {
            query.push_str("&category=");
            query.extend(utf8_percent_encode(category, COMPONENT));
        }
        query
    }
}
