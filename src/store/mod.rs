mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Persistence seam for the product handlers.
///
/// `update` and `delete` return the number of affected rows so callers can
/// tell a miss apart from a hit.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Inserts the product and returns the datastore-assigned id.
    async fn create(&self, req: &ProductRequest) -> Result<i32>;

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64>;

    async fn delete(&self, id: i32) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}
