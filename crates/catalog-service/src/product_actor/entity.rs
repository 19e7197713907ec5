//! [`ActorEntity`] implementation for [`Product`].
//!
//! The store enforces the column constraints here: `stock` is non-negative by type, and
//! `price` must be a finite, non-negative number. A rejected create or update never
//! touches the stored rows.

use super::error::ProductError;
use crate::model::{Product, ProductFields, ProductFilter, ProductId};
use actor_store::ActorEntity;
use async_trait::async_trait;
use std::cmp::Ordering;

fn check_fields(fields: &ProductFields) -> Result<(), ProductError> {
    if !fields.price.is_finite() || fields.price < 0.0 {
        return Err(ProductError::InvalidPrice(fields.price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Update = ProductFields;
    type Filter = ProductFilter;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductFields) -> Result<Self, Self::Error> {
        check_fields(&params)?;
        Ok(Product::new(id, params))
    }

    /// Full replace of every business field.
    async fn on_update(&mut self, update: ProductFields) -> Result<(), Self::Error> {
        check_fields(&update)?;
        self.replace(update);
        Ok(())
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.matches(self)
    }

    /// Name ascending; equal names fall back to creation order.
    fn cmp_order(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}
