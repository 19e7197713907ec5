//! Listing predicate for products.
//!
//! A [`ProductFilter`] is a conjunction of optional clauses: a case-insensitive name
//! substring and inclusive lower/upper price bounds. An empty filter selects everything.

use super::product::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Lowercased needle.
    name: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ProductFilter {
    pub fn builder() -> ProductFilterBuilder {
        ProductFilterBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(needle) = &self.name {
            if !product.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Builder for [`ProductFilter`].
#[derive(Debug, Default)]
pub struct ProductFilterBuilder {
    filter: ProductFilter,
}

impl ProductFilterBuilder {
    /// Name substring, matched case-insensitively. An empty string adds no clause.
    pub fn name_contains(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.filter.name = (!name.is_empty()).then(|| name.to_lowercase());
        self
    }

    /// Inclusive lower price bound.
    pub fn min_price(mut self, min: f64) -> Self {
        self.filter.min_price = Some(min);
        self
    }

    /// Inclusive upper price bound.
    pub fn max_price(mut self, max: f64) -> Self {
        self.filter.max_price = Some(max);
        self
    }

    pub fn build(self) -> ProductFilter {
        self.filter
    }
}
