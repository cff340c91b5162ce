//! Product entity - Maps the [`crate::models::Product`] record onto the `product` table.
//!
//! One row per product, one nullable column per attribute. The `id` column is an
//! auto-incrementing primary key, so the database assigns identifiers on insert.

use crate::models;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    /// Unique identifier, generated by the database
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    /// Display name of the product (e.g., "Widget")
    pub name: Option<String>,
    /// Free-form description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Unit price, no currency attached
    pub price: Option<f64>,
    /// Classification label (e.g., "Tools")
    pub category: Option<String>,
    /// Units on hand
    pub stock_quantity: Option<i32>,
}

/// Products have no relationships to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Product {
    fn from(model: Model) -> Self {
        Self::new(
            Some(model.id),
            model.name,
            model.description,
            model.price,
            model.category,
            model.stock_quantity,
        )
    }
}

impl ActiveModel {
    /// Builds an insertable row from a record. The record's `id` is ignored so the
    /// database can assign one.
    #[must_use]
    pub fn for_insert(product: &models::Product) -> Self {
        Self {
            id: NotSet,
            ..Self::with_attributes(product)
        }
    }

    /// Overwrites every attribute of an existing row with the record's values,
    /// including clearing columns the record leaves unset.
    pub fn replace_attributes(&mut self, product: &models::Product) {
        let Self {
            name,
            description,
            price,
            category,
            stock_quantity,
            ..
        } = Self::with_attributes(product);

        self.name = name;
        self.description = description;
        self.price = price;
        self.category = category;
        self.stock_quantity = stock_quantity;
    }

    fn with_attributes(product: &models::Product) -> Self {
        Self {
            id: NotSet,
            name: Set(product.name().map(str::to_owned)),
            description: Set(product.description().map(str::to_owned)),
            price: Set(product.price()),
            category: Set(product.category().map(str::to_owned)),
            stock_quantity: Set(product.stock_quantity()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_model_into_product_keeps_id_and_nulls() {
        let model = Model {
            id: 7,
            name: Some("Widget".to_string()),
            description: None,
            price: Some(9.99),
            category: None,
            stock_quantity: Some(0),
        };

        let product: models::Product = model.into();

        assert_eq!(product.id(), Some(7));
        assert_eq!(product.name(), Some("Widget"));
        assert_eq!(product.description(), None);
        assert_eq!(product.price(), Some(9.99));
        assert_eq!(product.category(), None);
        assert_eq!(product.stock_quantity(), Some(0));
    }

    #[test]
    fn test_for_insert_leaves_id_unset() {
        let product = models::Product::new(
            Some(99),
            Some("Widget".to_string()),
            None,
            Some(1.5),
            Some("Tools".to_string()),
            Some(3),
        );

        let active = ActiveModel::for_insert(&product);

        assert!(active.id.is_not_set());
        assert_eq!(active.name, Set(Some("Widget".to_string())));
        assert_eq!(active.description, Set(None));
        assert_eq!(active.stock_quantity, Set(Some(3)));
    }

    #[test]
    fn test_replace_attributes_keeps_existing_id() {
        let existing = Model {
            id: 5,
            name: Some("Old".to_string()),
            description: Some("Old description".to_string()),
            price: Some(2.0),
            category: Some("Misc".to_string()),
            stock_quantity: Some(1),
        };
        let mut active: ActiveModel = existing.into();

        let mut replacement = models::Product::default();
        replacement.set_name(Some("New".to_string()));
        active.replace_attributes(&replacement);

        assert_eq!(active.id.clone().unwrap(), 5);
        assert_eq!(active.name, Set(Some("New".to_string())));
        assert_eq!(active.description, Set(None));
        assert_eq!(active.price, Set(None));
        assert_eq!(active.category, Set(None));
        assert_eq!(active.stock_quantity, Set(None));
    }
}
