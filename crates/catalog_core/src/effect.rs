use crate::item::{ItemId, NewItemFields};

/// Correlates an optimistic mutation with its backing confirmation.
/// Assigned by the state, strictly increasing within a session.
pub type MutationToken = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full item set from the backing store.
    FetchAll,
    /// Delete an item from the backing store.
    DeleteItem { token: MutationToken, id: ItemId },
    /// Push a new title for an item to the backing store.
    UpdateTitle {
        token: MutationToken,
        id: ItemId,
        title: String,
    },
    /// Create a new item in the backing store.
    CreateItem {
        token: MutationToken,
        fields: NewItemFields,
    },
}

/// How an optimistic mutation reconciles when its backing call fails.
///
/// The two strategies are intentionally distinct: delete restores the
/// captured snapshot, rename keeps the optimistic state. Unifying them
/// would change observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilePolicy {
    /// Restore the catalog snapshot captured when the mutation applied.
    Reversible,
    /// Keep the optimistic state; the failure is logged and dropped.
    FireAndForget,
}
