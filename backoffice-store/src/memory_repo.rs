use crate::repository::{OrderRepository, ProductRepository, StoreError, UpdateAck};
use async_trait::async_trait;
use backoffice_catalog::Product;
use backoffice_order::{Order, OrderUpdateRequest};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory stand-in for the remote API.
///
/// Records are kept in insertion order. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    orders: Arc<RwLock<Vec<Order>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
            products: Arc::default(),
        }
    }

    /// Load orders from a JSON array on disk
    pub async fn from_orders_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let orders: Vec<Order> = serde_json::from_str(&raw)?;

        tracing::info!(path = %path.as_ref().display(), count = orders.len(), "seeded orders");
        Ok(Self::with_orders(orders))
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.clone())
    }

    async fn update_order(&self, id: &str, update: OrderUpdateRequest) -> Result<UpdateAck, StoreError> {
        let mut orders = self.orders.write().await;
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            tracing::warn!(order_id = id, "update for unknown order");
            return Ok(UpdateAck { success: false });
        };

        order.customer = update.customer;
        order.cart_items = update.cart_items;
        order.pricing = update.pricing;
        order.status = update.status;

        tracing::info!(order_id = id, "order updated");
        Ok(UpdateAck { success: true })
    }

    async fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|o| o.id != id);

        if orders.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn create_product(&self, mut product: Product) -> Result<String, StoreError> {
        let mut products = self.products.write().await;

        if product.id.is_empty() {
            product.id = Uuid::new_v4().to_string();
        } else if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::Conflict(product.id));
        }

        let id = product.id.clone();
        products.push(product);
        tracing::info!(product_id = %id, "product created");
        Ok(id)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn update_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write().await;
        let existing = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::NotFound(product.id.clone()))?;

        *existing = product;
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
