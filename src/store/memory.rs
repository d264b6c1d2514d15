use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

use super::ProductStore;

/// In-memory store with serial ids starting at 1, used by tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    inner: Arc<RwLock<Table>>,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, req: &ProductRequest) -> Result<i32> {
        let mut table = self.inner.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, Product::from_request(id, req.clone()));
        Ok(id)
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&id) {
            Some(product) => {
                *product = Product::from_request(id, req.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let mut table = self.inner.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductRequest {
        ProductRequest {
            name: "Widget".to_string(),
            price: 9.99,
            stock: 10,
        }
    }

    #[tokio::test]
    async fn ids_are_serial_and_never_reused() {
        let store = InMemoryProductStore::new();

        let first = store.create(&widget()).await.unwrap();
        let second = store.create(&widget()).await.unwrap();
        assert_eq!((first, second), (1, 2));

        store.delete(second).await.unwrap();
        let third = store.create(&widget()).await.unwrap();
        assert_eq!(third, 3);
    }

    #[tokio::test]
    async fn update_reports_affected_rows() {
        let store = InMemoryProductStore::new();
        let id = store.create(&widget()).await.unwrap();

        let gadget = ProductRequest {
            name: "Gadget".to_string(),
            price: 1.5,
            stock: 0,
        };
        assert_eq!(store.update(id, &gadget).await.unwrap(), 1);
        assert_eq!(store.update(id + 100, &gadget).await.unwrap(), 0);

        let stored = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored, Product::from_request(id, gadget));
    }

    #[tokio::test]
    async fn delete_of_missing_row_leaves_table_untouched() {
        let store = InMemoryProductStore::new();
        store.create(&widget()).await.unwrap();

        assert_eq!(store.delete(42).await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
