//! Entity module - Contains the SeaORM entity definitions for the database.
//! Entities bind the plain records in [`crate::models`] onto tables.
//! Each entity has a Model struct for row data and an Entity struct for operations.

pub mod product;

pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
