//! Facet derivation: pure projections over (catalog, selection).
//!
//! Each facet's option set is computed against the *other* active facets
//! only, so a selected value never disappears from its own dropdown.

use crate::item::Item;

/// Active filter selections. Empty text means unconstrained; price and
/// rating bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub brand: String,
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: f64,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            brand: String::new(),
            category: String::new(),
            min_price: 0.0,
            max_price: f64::INFINITY,
            min_rating: 0.0,
        }
    }
}

impl FilterSelection {
    fn matches_brand(&self, item: &Item) -> bool {
        self.brand.is_empty() || item.brand == self.brand
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.category.is_empty() || item.category == self.category
    }

    fn matches_price(&self, item: &Item) -> bool {
        item.price >= self.min_price && item.price <= self.max_price
    }

    fn matches_rating(&self, item: &Item) -> bool {
        item.rating >= self.min_rating
    }
}

/// One selectable price range. Bounds are fixed constants, never derived
/// from the catalog contents.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// The fixed bucket set offered whenever the price-scoped subset is
/// non-empty, in display order.
pub const PRICE_BUCKETS: [PriceBucket; 6] = [
    PriceBucket {
        label: "All Prices",
        min: 0.0,
        max: f64::INFINITY,
    },
    PriceBucket {
        label: "Under $50",
        min: 0.0,
        max: 50.0,
    },
    PriceBucket {
        label: "$50 - $100",
        min: 50.0,
        max: 100.0,
    },
    PriceBucket {
        label: "$100 - $200",
        min: 100.0,
        max: 200.0,
    },
    PriceBucket {
        label: "$200 - $500",
        min: 200.0,
        max: 500.0,
    },
    PriceBucket {
        label: "Over $500",
        min: 500.0,
        max: f64::INFINITY,
    },
];

/// One selectable minimum-rating threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingOption {
    pub label: String,
    pub value: f64,
}

/// Items satisfying all four active constraints, in catalog order.
pub fn visible_items<'a>(catalog: &'a [Item], selection: &FilterSelection) -> Vec<&'a Item> {
    catalog
        .iter()
        .filter(|item| {
            selection.matches_brand(item)
                && selection.matches_category(item)
                && selection.matches_price(item)
                && selection.matches_rating(item)
        })
        .collect()
}

/// Distinct brands among items passing every constraint except brand,
/// sorted ascending.
pub fn brand_options(catalog: &[Item], selection: &FilterSelection) -> Vec<String> {
    let mut brands: Vec<String> = catalog
        .iter()
        .filter(|item| {
            selection.matches_category(item)
                && selection.matches_price(item)
                && selection.matches_rating(item)
        })
        .map(|item| item.brand.clone())
        .collect();
    brands.sort();
    brands.dedup();
    brands
}

/// Distinct categories among items passing every constraint except
/// category, sorted ascending.
pub fn category_options(catalog: &[Item], selection: &FilterSelection) -> Vec<String> {
    let mut categories: Vec<String> = catalog
        .iter()
        .filter(|item| {
            selection.matches_brand(item)
                && selection.matches_price(item)
                && selection.matches_rating(item)
        })
        .map(|item| item.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// The fixed bucket set, or nothing when no item passes the
/// brand/category/rating constraints. Scoping only gates whether buckets
/// are offered at all, not their ranges.
pub fn price_bucket_options(catalog: &[Item], selection: &FilterSelection) -> Vec<PriceBucket> {
    let scope_occupied = catalog.iter().any(|item| {
        selection.matches_brand(item)
            && selection.matches_category(item)
            && selection.matches_rating(item)
    });
    if scope_occupied {
        PRICE_BUCKETS.to_vec()
    } else {
        Vec::new()
    }
}

/// Rating thresholds: a synthetic "All Ratings" entry followed by the
/// distinct integer floors of qualifying ratings, descending. NaN ratings
/// never contribute a threshold.
pub fn rating_options(catalog: &[Item], selection: &FilterSelection) -> Vec<RatingOption> {
    let mut floors: Vec<i64> = catalog
        .iter()
        .filter(|item| {
            selection.matches_brand(item)
                && selection.matches_category(item)
                && selection.matches_price(item)
        })
        .filter(|item| item.rating.is_finite())
        .map(|item| item.rating.floor() as i64)
        .collect();
    floors.sort_unstable();
    floors.dedup();

    let mut options = vec![RatingOption {
        label: "All Ratings".to_owned(),
        value: 0.0,
    }];
    options.extend(floors.into_iter().rev().map(|floor| RatingOption {
        label: format!("{floor}+ Stars"),
        value: floor as f64,
    }));
    options
}
