use crate::effect::MutationToken;
use crate::item::{Item, ItemId, NewItemForm};

/// A single facet of the filter bar changing value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    /// Exact brand match; empty clears the constraint.
    Brand(String),
    /// Exact category match; empty clears the constraint.
    Category(String),
    /// Inclusive price bounds, usually taken from a selected bucket.
    PriceRange { min: f64, max: f64 },
    /// Inclusive minimum rating.
    MinRating(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Kick off the one-time catalog fetch.
    LoadRequested,
    /// The backing fetch finished.
    LoadCompleted {
        result: Result<Vec<Item>, String>,
    },
    /// User changed one facet of the filter bar.
    FilterChanged(FilterUpdate),
    /// User reset every facet to its default.
    FiltersCleared,
    /// User deleted a row.
    RemoveRequested { id: ItemId },
    /// The backing delete finished.
    RemoveConfirmed {
        token: MutationToken,
        outcome: Result<(), String>,
    },
    /// User committed an inline title edit.
    RenameRequested { id: ItemId, title: String },
    /// The backing title update finished.
    RenameConfirmed {
        token: MutationToken,
        outcome: Result<(), String>,
    },
    /// User submitted the add-item form.
    SubmitNewItem { form: NewItemForm },
    /// The backing create finished.
    CreateConfirmed {
        token: MutationToken,
        result: Result<Item, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
