//! Catalog filtering by audience, price band, and search text.
//!
//! Each criterion is an independent predicate over a single [`Product`];
//! a product is kept when all three accept it. Filtering never reorders or
//! mutates the source, so applying a filter to its own output returns the
//! same sequence.

use rust_decimal::Decimal;

use crate::types::{IdealFor, Price, Product};

/// Upper bound (inclusive) of the low price band.
const LOW_MAX: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Lower bound (inclusive) of the high price band.
const HIGH_MIN: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Men,
    Women,
}

impl Category {
    /// Selector value used by the category control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Men => "men",
            Self::Women => "women",
        }
    }

    /// Parse a selector value. Unknown or empty values select everything.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "men" => Self::Men,
            "women" => Self::Women,
            _ => Self::All,
        }
    }

    /// Whether a product belongs to this category.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Men => product.ideal_for == IdealFor::Men,
            Self::Women => product.ideal_for == IdealFor::Women,
        }
    }
}

/// Price band selector over a product's current price.
///
/// `Low` is `price <= 1000`, `Mid` is `1000 < price < 2000`, and `High` is
/// `price >= 2000`. Every price falls in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceRange {
    #[default]
    All,
    Low,
    Mid,
    High,
}

impl PriceRange {
    /// Selector value used by the price control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// Parse a selector value. Unknown or empty values select everything.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "low" => Self::Low,
            "mid" => Self::Mid,
            "high" => Self::High,
            _ => Self::All,
        }
    }

    /// The band a price belongs to. Never returns `All`.
    #[must_use]
    pub fn classify(price: Price) -> Self {
        let amount = price.amount();
        if amount <= LOW_MAX {
            Self::Low
        } else if amount < HIGH_MIN {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Whether a price falls inside this band.
    #[must_use]
    pub fn contains(self, price: Price) -> bool {
        self == Self::All || Self::classify(price) == self
    }
}

/// Normalized search text.
///
/// Matching is a case-insensitive substring test against the product name
/// or brand. A blank query matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and lowercase raw input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the query is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the product's name or brand contains the query.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty()
            || product.name.to_lowercase().contains(&self.0)
            || product.brand.to_lowercase().contains(&self.0)
    }
}

/// The combined filter state of the catalog controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub category: Category,
    pub price_range: PriceRange,
    pub query: SearchQuery,
}

impl CatalogFilter {
    /// Build a filter from already-parsed selectors and raw search text.
    #[must_use]
    pub fn new(category: Category, price_range: PriceRange, query: &str) -> Self {
        Self {
            category,
            price_range,
            query: SearchQuery::new(query),
        }
    }

    /// Whether no criterion narrows the catalog.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.category == Category::All && self.price_range == PriceRange::All && self.query.is_empty()
    }

    /// Whether a product satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self.price_range.contains(product.new_price)
            && self.query.matches(product)
    }

    /// Keep the matching products, preserving their order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        if self.is_passthrough() {
            return products.into_iter().collect();
        }
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter a product collection by category, price band, and search text.
#[must_use]
pub fn filter<'a>(
    products: &'a [Product],
    category: Category,
    price_range: PriceRange,
    query: &str,
) -> Vec<&'a Product> {
    CatalogFilter::new(category, price_range, query).apply(products)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::types::ProductId;

    fn product(id: &str, name: &str, brand: &str, price: i64, ideal_for: IdealFor) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            brand: brand.to_string(),
            image: format!("/img/{id}.webp"),
            new_price: Price::whole(price),
            old_price: Price::whole(price * 2),
            discount: Decimal::from(50),
            rating: Decimal::from(4),
            ideal_for,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Nike Air", "Nike", 999, IdealFor::Men),
            product("2", "Cloud Runner", "Puma", 1000, IdealFor::Women),
            product("3", "Court Classic", "Adidas", 1001, IdealFor::Men),
            product("4", "Trail Blazer", "Reebok", 1999, IdealFor::Women),
            product("5", "Street Pro", "NIKE", 2000, IdealFor::Other("U".to_string())),
            product("6", "Marathon Elite", "Asics", 4500, IdealFor::Men),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    const CATEGORIES: [Category; 3] = [Category::All, Category::Men, Category::Women];
    const RANGES: [PriceRange; 4] = [
        PriceRange::All,
        PriceRange::Low,
        PriceRange::Mid,
        PriceRange::High,
    ];
    const QUERIES: [&str; 4] = ["", "   ", "nike", "ZZZ"];

    #[test]
    fn test_all_passthrough_preserves_order() {
        let products = catalog();
        let result = filter(&products, Category::All, PriceRange::All, "");
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_men_only_returns_m() {
        let products = catalog();
        let result = filter(&products, Category::Men, PriceRange::All, "");
        assert_eq!(ids(&result), vec!["1", "3", "6"]);
        assert!(result.iter().all(|p| p.ideal_for == IdealFor::Men));
    }

    #[test]
    fn test_women_only_returns_w() {
        let products = catalog();
        let result = filter(&products, Category::Women, PriceRange::All, "");
        assert_eq!(ids(&result), vec!["2", "4"]);
    }

    #[test]
    fn test_price_band_boundaries() {
        assert_eq!(PriceRange::classify(Price::whole(1000)), PriceRange::Low);
        assert_eq!(PriceRange::classify(Price::whole(1001)), PriceRange::Mid);
        assert_eq!(PriceRange::classify(Price::whole(1999)), PriceRange::Mid);
        assert_eq!(PriceRange::classify(Price::whole(2000)), PriceRange::High);
        assert_eq!(PriceRange::classify(Price::whole(0)), PriceRange::Low);
    }

    #[test]
    fn test_price_band_fractional_boundaries() {
        let just_over = Price::new(Decimal::from_str("1000.01").unwrap());
        let just_under = Price::new(Decimal::from_str("1999.99").unwrap());
        assert_eq!(PriceRange::classify(just_over), PriceRange::Mid);
        assert_eq!(PriceRange::classify(just_under), PriceRange::Mid);
    }

    #[test]
    fn test_every_product_in_exactly_one_band() {
        let products = catalog();
        for p in &products {
            let bands = [PriceRange::Low, PriceRange::Mid, PriceRange::High]
                .into_iter()
                .filter(|band| band.contains(p.new_price))
                .count();
            assert_eq!(bands, 1, "product {} matched {bands} bands", p.id);
        }

        let low = filter(&products, Category::All, PriceRange::Low, "").len();
        let mid = filter(&products, Category::All, PriceRange::Mid, "").len();
        let high = filter(&products, Category::All, PriceRange::High, "").len();
        assert_eq!(low + mid + high, products.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        let result = filter(&products, Category::All, PriceRange::All, "nike");
        assert_eq!(ids(&result), vec!["1", "5"]);

        let result = filter(&products, Category::All, PriceRange::All, "  CLOUD ");
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_search_matches_brand() {
        let products = catalog();
        let result = filter(&products, Category::All, PriceRange::All, "asi");
        assert_eq!(ids(&result), vec!["6"]);
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let products = catalog();
        let result = filter(&products, Category::All, PriceRange::All, " \t ");
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_criteria_compose_by_intersection() {
        let products = catalog();
        let result = filter(&products, Category::Men, PriceRange::Low, "nike");
        assert_eq!(ids(&result), vec!["1"]);

        let result = filter(&products, Category::Women, PriceRange::High, "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = catalog();
        for category in CATEGORIES {
            for range in RANGES {
                for query in QUERIES {
                    let filter = CatalogFilter::new(category, range, query);
                    let once = filter.apply(&products);
                    let twice = filter.apply(once.iter().copied());
                    assert_eq!(once, twice, "{category:?}/{range:?}/{query:?}");
                }
            }
        }
    }

    #[test]
    fn test_application_order_does_not_matter() {
        let products = catalog();
        let by_category: Vec<&Product> = CatalogFilter::new(Category::Men, PriceRange::All, "")
            .apply(&products);
        let category_then_price =
            CatalogFilter::new(Category::All, PriceRange::High, "").apply(by_category);

        let by_price: Vec<&Product> = CatalogFilter::new(Category::All, PriceRange::High, "")
            .apply(&products);
        let price_then_category =
            CatalogFilter::new(Category::Men, PriceRange::All, "").apply(by_price);

        assert_eq!(category_then_price, price_then_category);
        assert_eq!(ids(&category_then_price), vec!["6"]);
    }

    #[test]
    fn test_source_is_untouched() {
        let products = catalog();
        let before = products.clone();
        let _ = filter(&products, Category::Women, PriceRange::Mid, "trail");
        assert_eq!(products, before);
    }

    #[test]
    fn test_selector_parsing_falls_back_to_all() {
        assert_eq!(Category::from_param("men"), Category::Men);
        assert_eq!(Category::from_param("women"), Category::Women);
        assert_eq!(Category::from_param("kids"), Category::All);
        assert_eq!(Category::from_param(""), Category::All);
        assert_eq!(PriceRange::from_param("mid"), PriceRange::Mid);
        assert_eq!(PriceRange::from_param("cheap"), PriceRange::All);
    }

    #[test]
    fn test_passthrough_detection() {
        assert!(CatalogFilter::default().is_passthrough());
        assert!(CatalogFilter::new(Category::All, PriceRange::All, "  ").is_passthrough());
        assert!(!CatalogFilter::new(Category::Men, PriceRange::All, "").is_passthrough());
    }
}
