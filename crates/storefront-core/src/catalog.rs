//! Product Catalog
//!
//! Fetch a page of products, filter it by the search box, and turn it into
//! card view models. Rendering never fails: missing fields get fallbacks.

use crate::domain::Product;
use crate::gateway::{GatewayClient, HttpTransport, ProductQuery};
use crate::i18n::{Language, Message};

pub const UNNAMED_PRODUCT: &str = "Unnamed Product";
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Categories offered by the filter select (empty value = all)
pub const CATEGORIES: &[&str] = &["Electronics", "Clothing"];

/// Current search box and category select values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
}

impl CatalogFilter {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }
}

/// Keep products whose name or description contains `term`, ignoring case.
/// A blank term keeps everything.
pub fn filter_products(products: Vec<Product>, term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products;
    }
    products.into_iter().filter(|p| p.matches(&needle)).collect()
}

/// Everything a product card displays
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Value of the "Add to Cart" button's `data-id`
    pub id: String,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let title = product
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNNAMED_PRODUCT)
            .to_string();

        Self {
            id: product.id.clone().unwrap_or_default(),
            image_src: product
                .image_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            image_alt: title.clone(),
            title,
            description: product.description.clone().unwrap_or_default(),
            price: format_price(product.price.unwrap_or(0.0)),
        }
    }
}

/// `$12.50`, rounded the way JavaScript's `toFixed(2)` does
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    let cents = magnitude * 100.0;
    // Only multiples of 1/8 can sit exactly on a half cent; those round up
    let magnitude = if (magnitude * 8.0).fract() == 0.0 && cents.fract() == 0.5 {
        cents.ceil() / 100.0
    } else {
        magnitude
    };
    let sign = if price < 0.0 { "-" } else { "" };
    format!("${}{:.2}", sign, magnitude)
}

/// What the catalog area shows; exactly one at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogView {
    #[default]
    Loading,
    /// Generic, localized message; the cause is only logged
    Error(String),
    /// Possibly empty list of cards
    Content(Vec<ProductCard>),
}

impl CatalogView {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogView::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogView::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            CatalogView::Content(cards) => cards,
            _ => &[],
        }
    }
}

/// Fetch-filter-render command behind the catalog page
pub struct CatalogController<T> {
    client: GatewayClient<T>,
    per_page: u32,
    lang: Language,
}

impl<T: HttpTransport> CatalogController<T> {
    pub fn new(client: GatewayClient<T>, per_page: u32, lang: Language) -> Self {
        Self {
            client,
            per_page,
            lang,
        }
    }

    /// Resulting view for `filter`; never returns `Loading`
    pub async fn load(&self, filter: &CatalogFilter) -> CatalogView {
        let query = ProductQuery::new(self.per_page).with_category(&filter.category);

        match self.client.products(&query).await {
            Ok(page) => {
                let received = page.products.len();
                let products = filter_products(page.products, &filter.search);
                log::info!(
                    "[CATALOG] Loaded {} products, {} after search {:?}",
                    received,
                    products.len(),
                    filter.search
                );
                CatalogView::Content(products.iter().map(ProductCard::from_product).collect())
            }
            Err(e) => {
                log::error!("[CATALOG] Error fetching products: {}", e);
                CatalogView::Error(Message::ProductsUnavailable.text(self.lang).to_string())
            }
        }
    }
}
