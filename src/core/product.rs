//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, retrieving, updating, searching and
//! deleting products, plus the inventory summary shown on the catalog dashboard.
//! Functions take and return [`Product`] records; the table mapping stays inside
//! [`crate::entities::product`]. No validation happens here: names, prices and stock
//! counts are stored exactly as given.

use crate::{
    entities::product,
    errors::{Error, Result},
    models::Product,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Dashboard figures over the whole catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Number of stored products
    pub total_products: u64,
    /// Number of distinct categories, ignoring products without one
    pub unique_categories: u64,
    /// Number of products with a stock quantity above zero
    pub in_stock: u64,
}

/// Retrieves every product, ordered by id (creation order).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<Product>> {
    let products: Vec<Product> = product::Entity::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    debug!("Fetched {} products.", products.len());
    Ok(products)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(db: &DatabaseConnection, product_id: i64) -> Result<Option<Product>> {
    let found = product::Entity::find_by_id(product_id).one(db).await?;
    debug!("Product lookup by id {}: found = {}", product_id, found.is_some());
    Ok(found.map(Product::from))
}

/// Stores a new product and returns it with its database-assigned id.
///
/// Any id already present on `new_product` is ignored.
///
/// # Errors
/// Returns an error if the database insert fails.
#[instrument(skip(db))]
pub async fn create_product(db: &DatabaseConnection, new_product: &Product) -> Result<Product> {
    let inserted = product::ActiveModel::for_insert(new_product).insert(db).await?;
    info!("Created product {} ({:?})", inserted.id, inserted.name);
    Ok(inserted.into())
}

/// Replaces every attribute of an existing product with the values in `changes`.
///
/// Unset fields in `changes` clear the stored value. The stored id is kept; any id
/// carried by `changes` is ignored.
///
/// # Errors
/// Returns `Error::ProductNotFound` if no product has this id, or an error if
/// the database update fails.
#[instrument(skip(db))]
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    changes: &Product,
) -> Result<Product> {
    let mut existing: product::ActiveModel = product::Entity::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    existing.replace_attributes(changes);

    let updated = existing.update(db).await?;
    info!("Updated product {}", updated.id);
    Ok(updated.into())
}

/// Permanently removes a product.
///
/// # Errors
/// Returns `Error::ProductNotFound` if no product has this id, or an error if
/// the database delete fails.
#[instrument(skip(db))]
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = product::Entity::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    info!("Deleted product {}", product_id);
    Ok(())
}

/// Finds products whose name or category contains `term` as a literal substring,
/// ignoring case (Unicode-aware).
///
/// A blank term matches everything.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn search_products(db: &DatabaseConnection, term: &str) -> Result<Vec<Product>> {
    let term = term.trim();
    if term.is_empty() {
        return get_all_products(db).await;
    }

    // `%` and `_` are ordinary characters here; both sides fold case the same way.
    let needle = term.to_lowercase();
    let contains = |field: Option<&str>| {
        field.is_some_and(|value| value.to_lowercase().contains(&needle))
    };
    let products: Vec<Product> = get_all_products(db)
        .await?
        .into_iter()
        .filter(|p| contains(p.name()) || contains(p.category()))
        .collect();
    debug!("Search '{}' matched {} products.", term, products.len());
    Ok(products)
}

/// Computes the catalog dashboard figures.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn inventory_summary(db: &DatabaseConnection) -> Result<InventorySummary> {
    let products = get_all_products(db).await?;
    Ok(summarize(&products))
}

fn summarize(products: &[Product]) -> InventorySummary {
    let categories: HashSet<&str> = products.iter().filter_map(Product::category).collect();
    let in_stock = products
        .iter()
        .filter(|p| p.stock_quantity().is_some_and(|qty| qty > 0))
        .count();

    let to_count = |n: usize| u64::try_from(n).unwrap_or(u64::MAX);
    InventorySummary {
        total_products: to_count(products.len()),
        unique_categories: to_count(categories.len()),
        in_stock: to_count(in_stock),
    }
}
