//! In-process backing store. This is the executable statement of the
//! backing contract: ids are `1 + max(existing)` (1 when empty), and
//! delete/update on a missing id succeed silently.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::api::{ApiError, CatalogApi};
use crate::types::{ApiItem, ItemId, NewItemFields};

/// Backing operation selector for one-shot failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOp {
    FetchAll,
    Delete,
    UpdateTitle,
    Create,
}

pub struct MemoryCatalogApi {
    items: Mutex<Vec<ApiItem>>,
    fail_next: Mutex<HashSet<ApiOp>>,
}

impl MemoryCatalogApi {
    pub fn new(seed: Vec<ApiItem>) -> Self {
        Self {
            items: Mutex::new(seed),
            fail_next: Mutex::new(HashSet::new()),
        }
    }

    /// Arms the next call of `op` to fail with a network error. One-shot:
    /// the call after that succeeds again.
    pub fn fail_next(&self, op: ApiOp) {
        self.fail_next.lock().expect("fail_next lock").insert(op);
    }

    /// Snapshot of the store's current contents, for assertions.
    pub fn items(&self) -> Vec<ApiItem> {
        self.items.lock().expect("items lock").clone()
    }

    fn take_failure(&self, op: ApiOp) -> Result<(), ApiError> {
        if self.fail_next.lock().expect("fail_next lock").remove(&op) {
            return Err(ApiError::Network("injected failure".to_owned()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogApi for MemoryCatalogApi {
    async fn fetch_all(&self) -> Result<Vec<ApiItem>, ApiError> {
        self.take_failure(ApiOp::FetchAll)?;
        Ok(self.items())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
        self.take_failure(ApiOp::Delete)?;
        self.items
            .lock()
            .expect("items lock")
            .retain(|item| item.id != id);
        Ok(())
    }

    async fn update_title(&self, id: ItemId, title: &str) -> Result<(), ApiError> {
        self.take_failure(ApiOp::UpdateTitle)?;
        let mut items = self.items.lock().expect("items lock");
        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.title = title.to_owned();
        }
        Ok(())
    }

    async fn create_item(&self, fields: &NewItemFields) -> Result<ApiItem, ApiError> {
        self.take_failure(ApiOp::Create)?;
        let mut items = self.items.lock().expect("items lock");
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = ApiItem {
            id,
            title: fields.title.clone(),
            brand: fields.brand.clone(),
            category: fields.category.clone(),
            price: fields.price,
            rating: fields.rating,
        };
        items.push(item.clone());
        Ok(item)
    }
}
