//! Catalog engine: backing-store adapters and effect execution.
mod api;
mod engine;
mod memory;
mod types;

pub use api::{ApiError, ApiSettings, CatalogApi, ReqwestCatalogApi, DEFAULT_BRAND};
pub use engine::{EngineCommander, EngineHandle};
pub use memory::{ApiOp, MemoryCatalogApi};
pub use types::{ApiItem, EngineEvent, ItemId, MutationToken, NewItemFields};
