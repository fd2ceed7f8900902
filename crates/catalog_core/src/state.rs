use crate::effect::{MutationToken, ReconcilePolicy};
use crate::facets::{self, FilterSelection};
use crate::item::{Item, ItemId};
use crate::msg::FilterUpdate;
use crate::view_model::CatalogViewModel;

/// Where the one-time initial load stands. `Failed` is blocking: the
/// presentation layer shows an error view instead of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Transient, user-visible outcome of a rejected or failed operation.
/// Cleared by the next user-intent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MutationFailed(String),
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
struct PendingMutation {
    token: MutationToken,
    policy: ReconcilePolicy,
    /// Catalog exactly as it was before the mutation applied.
    /// Present iff the policy is `Reversible`.
    snapshot: Option<Vec<Item>>,
}

/// Single writer of the catalog snapshot. Every transition goes through
/// [`crate::update`]; the presentation layer only ever sees [`view`] output.
///
/// [`view`]: CatalogState::view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    items: Vec<Item>,
    selection: FilterSelection,
    phase: LoadPhase,
    notice: Option<Notice>,
    pending: Vec<PendingMutation>,
    next_token: MutationToken,
    dirty: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the full presentation snapshot: visible rows plus the four
    /// facet option sets, each recomputed from the current catalog and
    /// selection.
    pub fn view(&self) -> CatalogViewModel {
        CatalogViewModel {
            loading: self.phase == LoadPhase::Loading,
            load_error: match &self.phase {
                LoadPhase::Failed(message) => Some(message.clone()),
                _ => None,
            },
            rows: facets::visible_items(&self.items, &self.selection)
                .into_iter()
                .cloned()
                .collect(),
            brand_options: facets::brand_options(&self.items, &self.selection),
            category_options: facets::category_options(&self.items, &self.selection),
            price_buckets: facets::price_bucket_options(&self.items, &self.selection),
            rating_options: facets::rating_options(&self.items, &self.selection),
            selection: self.selection.clone(),
            notice: self.notice.clone(),
        }
    }

    /// The full catalog snapshot, unfiltered, in insertion order.
    pub fn catalog(&self) -> &[Item] {
        &self.items
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Returns whether the view changed since the last call, resetting
    /// the flag. The app loop uses this to coalesce re-renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
        self.mark_dirty();
    }

    /// Success replaces the catalog atomically; failure leaves the prior
    /// catalog (empty at startup) and records a blocking error.
    pub(crate) fn apply_load(&mut self, result: Result<Vec<Item>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Ready;
            }
            Err(message) => {
                self.phase = LoadPhase::Failed(message);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn apply_filter(&mut self, update: FilterUpdate) {
        self.notice = None;
        match update {
            FilterUpdate::Brand(brand) => self.selection.brand = brand,
            FilterUpdate::Category(category) => self.selection.category = category,
            FilterUpdate::PriceRange { min, max } => {
                self.selection.min_price = min;
                self.selection.max_price = max;
            }
            FilterUpdate::MinRating(min_rating) => self.selection.min_rating = min_rating,
        }
        self.mark_dirty();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.notice = None;
        self.selection = FilterSelection::default();
        self.mark_dirty();
    }

    /// Optimistically removes the row, capturing the pre-removal snapshot
    /// for rollback. Returns `None` (no-op) for an id not in the catalog.
    pub(crate) fn begin_removal(&mut self, id: ItemId) -> Option<MutationToken> {
        if !self.items.iter().any(|item| item.id == id) {
            return None;
        }
        self.notice = None;
        let snapshot = self.items.clone();
        self.items.retain(|item| item.id != id);
        let token = self.take_token();
        self.pending.push(PendingMutation {
            token,
            policy: ReconcilePolicy::Reversible,
            snapshot: Some(snapshot),
        });
        self.mark_dirty();
        Some(token)
    }

    /// Optimistically applies the new title. No snapshot: a failed
    /// confirmation keeps the optimistic state. Returns `None` (no-op)
    /// for an id not in the catalog.
    pub(crate) fn begin_rename(&mut self, id: ItemId, title: &str) -> Option<MutationToken> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        self.notice = None;
        item.title = title.to_owned();
        let token = self.take_token();
        self.pending.push(PendingMutation {
            token,
            policy: ReconcilePolicy::FireAndForget,
            snapshot: None,
        });
        self.mark_dirty();
        Some(token)
    }

    pub(crate) fn begin_create(&mut self) -> MutationToken {
        self.notice = None;
        self.mark_dirty();
        self.take_token()
    }

    /// Reconciles a confirmation for an outstanding optimistic mutation.
    /// Unknown tokens (stale or duplicate confirmations) are ignored.
    pub(crate) fn resolve_pending(&mut self, token: MutationToken, outcome: Result<(), String>) {
        let Some(index) = self.pending.iter().position(|entry| entry.token == token) else {
            return;
        };
        let entry = self.pending.swap_remove(index);
        let Err(message) = outcome else {
            return;
        };
        match entry.policy {
            ReconcilePolicy::Reversible => {
                if let Some(snapshot) = entry.snapshot {
                    self.items = snapshot;
                }
                self.notice = Some(Notice::MutationFailed(message));
                self.mark_dirty();
            }
            ReconcilePolicy::FireAndForget => {
                // Intentionally swallowed; the app's event pump logs it.
            }
        }
    }

    /// A created item only lands in the catalog once the backing store
    /// has assigned its id.
    pub(crate) fn apply_create_result(&mut self, result: Result<Item, String>) {
        match result {
            Ok(item) => self.items.push(item),
            Err(message) => self.notice = Some(Notice::MutationFailed(message)),
        }
        self.mark_dirty();
    }

    pub(crate) fn reject_submission(&mut self, message: String) {
        self.notice = Some(Notice::ValidationFailed(message));
        self.mark_dirty();
    }

    fn take_token(&mut self) -> MutationToken {
        self.next_token += 1;
        self.next_token
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
