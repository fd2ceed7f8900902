use crate::facets::{FilterSelection, PriceBucket, RatingOption};
use crate::item::Item;
use crate::state::Notice;

/// Everything the presentation layer needs: the visible row sequence, the
/// four facet option sets, the loading/error flags, and any transient
/// notice. Recomputed in full on every state change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogViewModel {
    pub loading: bool,
    pub load_error: Option<String>,
    pub rows: Vec<Item>,
    pub brand_options: Vec<String>,
    pub category_options: Vec<String>,
    pub price_buckets: Vec<PriceBucket>,
    pub rating_options: Vec<RatingOption>,
    pub selection: FilterSelection,
    pub notice: Option<Notice>,
}
