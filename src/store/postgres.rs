use std::{future::Future, time::Duration};

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database,
    error::{AppError, Result},
    models::{Product, ProductRequest},
    queries::product_queries,
};

use super::ProductStore;

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgProductStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn with_deadline<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        with_deadline(self.query_timeout, fut).await
    }
}

// Dropping the query future on expiry cancels the in-flight call.
async fn with_deadline<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| AppError::DatabaseTimeout)?
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        self.with_deadline(product_queries::find_all(&self.pool)).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        self.with_deadline(product_queries::find_by_id(&self.pool, id))
            .await
    }

    async fn create(&self, req: &ProductRequest) -> Result<i32> {
        self.with_deadline(product_queries::create_product(&self.pool, req))
            .await
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64> {
        self.with_deadline(product_queries::update_product(&self.pool, id, req))
            .await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        self.with_deadline(product_queries::delete_product(&self.pool, id))
            .await
    }

    async fn ping(&self) -> Result<()> {
        self.with_deadline(database::check_health(&self.pool)).await
    }
}
