use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::{
    bill::RawBill,
    receipt::{CreateBillRequest, CreatedBill, UpdateBillRequest},
};

/// Remote collection of bills.
#[async_trait]
pub trait BillsCollection: Send + Sync {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError>;

    /// Uploads a receipt, creating the bill record it will be attached to.
    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, ServerError>;

    async fn update(&self, request: UpdateBillRequest) -> Result<RawBill, ServerError>;
}

/// Remote data access object.
pub trait Store: Send + Sync {
    type Bills: BillsCollection;

    fn bills(&self) -> &Self::Bills;
}

impl<S: Store> Store for Arc<S> {
    type Bills = S::Bills;

    fn bills(&self) -> &Self::Bills {
        S::bills(self)
    }
}

/// Persistent string key-value storage owned by the host (the browser's
/// local storage, typically).
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: String);
}

impl<K: KeyValueStorage> KeyValueStorage for Arc<K> {
    fn get_item(&self, key: &str) -> Option<String> {
        K::get_item(self, key)
    }

    fn set_item(&self, key: &str, value: String) {
        K::set_item(self, key, value)
    }
}
