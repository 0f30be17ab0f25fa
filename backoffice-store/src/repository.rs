use async_trait::async_trait;
use backoffice_catalog::Product;
use backoffice_order::{Order, OrderUpdateRequest};
use serde::{Deserialize, Serialize};

/// `{ "success": bool }` returned by `PUT /orders/{id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAck {
    pub success: bool,
}

/// Order endpoints of the remote API
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError>;

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    async fn update_order(&self, id: &str, update: OrderUpdateRequest) -> Result<UpdateAck, StoreError>;

    async fn delete_order(&self, id: &str) -> Result<(), StoreError>;
}

/// Product endpoints of the remote API
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the id assigned to the new product
    async fn create_product(&self, product: Product) -> Result<String, StoreError>;

    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn update_product(&self, product: Product) -> Result<(), StoreError>;

    async fn delete_product(&self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
