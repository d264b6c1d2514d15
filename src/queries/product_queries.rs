use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM products ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(req.stock)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn update_product(pool: &PgPool, id: i32, req: &ProductRequest) -> Result<u64> {
    let result = sqlx::query("UPDATE products SET name = $1, price = $2, stock = $3 WHERE id = $4")
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
