//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test products with sensible defaults.

use crate::{core::product, errors::Result, models::Product};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds an unsaved product with sensible defaults.
///
/// # Defaults
/// * `description`: "A widget"
/// * `price`: 9.99
/// * `category`: "Tools"
/// * `stock_quantity`: 42
#[must_use]
pub fn sample_product(name: &str) -> Product {
    Product::new(
        None,
        Some(name.to_string()),
        Some("A widget".to_string()),
        Some(9.99),
        Some("Tools".to_string()),
        Some(42),
    )
}

/// Stores a product built by [`sample_product`].
pub async fn create_test_product(db: &DatabaseConnection, name: &str) -> Result<Product> {
    product::create_product(db, &sample_product(name)).await
}

/// Stores a product with a custom category and stock quantity.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    category: Option<&str>,
    stock_quantity: Option<i32>,
) -> Result<Product> {
    let mut new_product = sample_product(name);
    new_product.set_category(category.map(str::to_owned));
    new_product.set_stock_quantity(stock_quantity);
    product::create_product(db, &new_product).await
}
