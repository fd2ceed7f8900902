//! Catalog core: pure state machine and facet derivation.
mod effect;
mod facets;
mod item;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, MutationToken, ReconcilePolicy};
pub use facets::{
    brand_options, category_options, price_bucket_options, rating_options, visible_items,
    FilterSelection, PriceBucket, RatingOption, PRICE_BUCKETS,
};
pub use item::{FormError, Item, ItemId, NewItemFields, NewItemForm};
pub use msg::{FilterUpdate, Msg};
pub use state::{CatalogState, LoadPhase, Notice};
pub use update::update;
pub use view_model::CatalogViewModel;
