//! Product routes.
//!
//! | Method | Path        | Result                       |
//! |--------|-------------|------------------------------|
//! | GET    | `/`         | all products, `?q=` searches |
//! | POST   | `/`         | 201 + created product        |
//! | GET    | `/summary`  | inventory summary            |
//! | GET    | `/:id`      | one product or 404           |
//! | PUT    | `/:id`      | updated product or 404       |
//! | DELETE | `/:id`      | 204 or 404                   |

use super::AppState;
use crate::core::product::{self, InventorySummary};
use crate::errors::{Error, Result};
use crate::models::Product;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive filter on name or category
    pub q: Option<String>,
}

/// Routes relative to the products base path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/summary", get(inventory_summary))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Lists all products, or only those matching `?q=`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>> {
    let products = match params.q.as_deref() {
        Some(term) => product::search_products(&state.database, term).await?,
        None => product::get_all_products(&state.database).await?,
    };
    Ok(Json(products))
}

/// Returns the catalog dashboard figures.
pub async fn inventory_summary(State(state): State<AppState>) -> Result<Json<InventorySummary>> {
    Ok(Json(product::inventory_summary(&state.database).await?))
}

/// Returns one product, or 404.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    product::get_product_by_id(&state.database, id)
        .await?
        .map(Json)
        .ok_or(Error::ProductNotFound { id })
}

/// Stores the posted product and answers 201 with its assigned id.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Product>,
) -> Result<(StatusCode, Json<Product>)> {
    let created = product::create_product(&state.database, &body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a product's attributes, or 404.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Product>,
) -> Result<Json<Product>> {
    Ok(Json(product::update_product(&state.database, id, &body).await?))
}

/// Deletes a product and answers 204, or 404.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    product::delete_product(&state.database, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
