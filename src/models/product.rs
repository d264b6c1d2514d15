use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

/// Body accepted by create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn from_request(id: i32, req: ProductRequest) -> Self {
        Self {
            id,
            name: req.name,
            price: req.price,
            stock: req.stock,
        }
    }
}
