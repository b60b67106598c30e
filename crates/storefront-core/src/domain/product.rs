//! Product Entity
//!
//! Products are fetched per request, rendered, and dropped on the next fetch.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// A product as returned by `GET /products`
///
/// Every field is optional: the catalog renders whatever arrives.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub stock_quantity: Option<i64>,
}

impl Product {
    /// Case-insensitive substring match over name and description
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };
        hit(&self.name) || hit(&self.description)
    }
}

/// One page of the product listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: Option<u64>,
    pub pages: Option<u64>,
    pub current_page: Option<u64>,
}

impl ProductPage {
    /// Decode a response body
    ///
    /// Only invalid JSON is an error. A missing or non-array `products`
    /// yields an empty page; entries that are not objects are skipped.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let products = match value.get("products") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter(|entry| entry.is_object())
                .filter_map(|entry| Product::deserialize(entry).ok())
                .collect(),
            _ => Vec::new(),
        };
        let field = |key: &str| value.get(key).and_then(Value::as_u64);

        Self {
            products,
            total: field("total"),
            pages: field("pages"),
            current_page: field("current_page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_products_field_is_empty() {
        let page = ProductPage::from_json(r#"{"total": 0}"#).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, Some(0));

        let page = ProductPage::from_json(r#"{"products": null}"#).unwrap();
        assert!(page.products.is_empty());

        let page = ProductPage::from_json("[]").unwrap();
        assert!(page.products.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ProductPage::from_json("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_full_product() {
        let page = ProductPage::from_value(&json!({
            "products": [{
                "id": 1,
                "name": "Laptop",
                "description": "High-performance laptop",
                "price": 999.99,
                "stock_quantity": 10,
                "category": "Electronics",
                "image_url": null
            }],
            "total": 1,
            "pages": 1,
            "current_page": 1
        }));

        assert_eq!(page.products.len(), 1);
        let laptop = &page.products[0];
        assert_eq!(laptop.id.as_deref(), Some("1"));
        assert_eq!(laptop.name.as_deref(), Some("Laptop"));
        assert_eq!(laptop.price, Some(999.99));
        assert_eq!(laptop.stock_quantity, Some(10));
        assert_eq!(laptop.image_url, None);
        assert_eq!(page.current_page, Some(1));
    }

    #[test]
    fn test_malformed_fields_become_none() {
        let page = ProductPage::from_value(&json!({
            "products": [
                {"name": 42, "price": "19.5", "description": ["x"]},
                {"price": "free"},
                "not a product",
                7
            ]
        }));

        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].name, None);
        assert_eq!(page.products[0].price, Some(19.5));
        assert_eq!(page.products[0].description, None);
        assert_eq!(page.products[1], Product::default());
    }

    #[test]
    fn test_matches_name_or_description() {
        let shirt = Product {
            name: Some("Red Shirt".into()),
            ..Default::default()
        };
        let hat = Product {
            name: Some("Blue Hat".into()),
            description: Some("Goes with a RED scarf".into()),
            ..Default::default()
        };
        let nameless = Product::default();

        assert!(shirt.matches("red"));
        assert!(hat.matches("red"));
        assert!(!hat.matches("shirt"));
        assert!(!nameless.matches("red"));
    }
}
