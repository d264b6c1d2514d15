use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductRequest},
    utils::{JsonBody, ProductId},
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.list().await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let id = state.store.create(&payload).await?;
    tracing::info!(product_id = id, "Created product");

    Ok((StatusCode::CREATED, Json(Product::from_request(id, payload))))
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>> {
    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

// A missing row still answers 200 here; only the log records the miss.
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<&'static str> {
    let rows = state.store.update(id, &payload).await?;
    if rows == 0 {
        tracing::warn!(product_id = id, "Update matched no product");
    } else {
        tracing::info!(product_id = id, "Updated product");
    }

    Ok("Product updated successfully")
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<&'static str> {
    let rows = state.store.delete(id).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Product not found".to_string()));
    }
    tracing::info!(product_id = id, "Deleted product");

    Ok("Product deleted successfully")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Answers a path under `/products/` that no route matched.
///
/// The segment after each prefix is an id that failed to match, so a request
/// with the method that prefix accepts gets 400 and anything else 405.
/// Returns `None` for paths outside the products subtree.
pub fn unmatched_product_path(method: &Method, path: &str) -> Option<AppError> {
    let accepted = if path.starts_with("/products/update/") {
        Method::PUT
    } else if path.starts_with("/products/delete/") {
        Method::DELETE
    } else if path.starts_with("/products/") {
        Method::GET
    } else {
        return None;
    };

    let method_ok =
        *method == accepted || (accepted == Method::GET && *method == Method::HEAD);
    if method_ok {
        Some(AppError::BadRequest("Invalid id".to_string()))
    } else {
        Some(AppError::MethodNotAllowed)
    }
}
