pub type ItemId = u64;

/// Correlation token minted by the caller for each mutation command,
/// echoed back on the matching completion event.
pub type MutationToken = u64;

/// Normalized catalog item as the backing store reports it. Ingress
/// normalization has already applied (a missing brand reads `"Generic"`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiItem {
    pub id: ItemId,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

/// Validated fields for a backing create call.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemFields {
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

/// Completion of one backing call, reported over the engine's event
/// channel in whatever order the calls happen to finish.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LoadCompleted {
        result: Result<Vec<ApiItem>, crate::ApiError>,
    },
    DeleteCompleted {
        token: MutationToken,
        id: ItemId,
        result: Result<(), crate::ApiError>,
    },
    RenameCompleted {
        token: MutationToken,
        id: ItemId,
        result: Result<(), crate::ApiError>,
    },
    CreateCompleted {
        token: MutationToken,
        result: Result<ApiItem, crate::ApiError>,
    },
}
