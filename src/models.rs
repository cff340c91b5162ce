//! Product record - the inventory item as the rest of the application sees it.
//!
//! This is a plain data holder with no knowledge of storage. The table binding
//! lives in [`crate::entities::product`], which converts rows to and from this type.
//! Every attribute is optional so that an unset field is a distinct, type-checked
//! state (a stock quantity of `Some(0)` is not the same as `None`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One inventory item.
///
/// Serializes with camelCase keys (`stockQuantity`), matching the JSON exchanged
/// with the catalog UI. Missing keys deserialize as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    stock_quantity: Option<i32>,
}

impl Product {
    /// Builds a product from all six values, stored verbatim.
    #[must_use]
    pub const fn new(
        id: Option<i64>,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        category: Option<String>,
        stock_quantity: Option<i32>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            stock_quantity,
        }
    }

    /// Storage-assigned identifier, `None` until the product is first saved.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unit price, no currency attached.
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        self.price
    }

    /// Classification label.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Units on hand. Negative values are accepted as-is.
    #[must_use]
    pub const fn stock_quantity(&self) -> Option<i32> {
        self.stock_quantity
    }

    /// Replaces the identifier.
    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replaces the price.
    pub const fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    /// Replaces the category.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Replaces the stock quantity.
    pub const fn set_stock_quantity(&mut self, stock_quantity: Option<i32>) {
        self.stock_quantity = stock_quantity;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={:?}, name={:?}, description={:?}, price={:?}, category={:?}, stockQuantity={:?})",
            self.id, self.name, self.description, self.price, self.category, self.stock_quantity
        )
    }
}
