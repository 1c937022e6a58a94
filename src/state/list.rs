//! Generic paginated expense list, instantiated for the personal view
//! and the approval queue.
//!
//! Fetches carry a sequence number: a response from a superseded fetch
//! (rapid page clicks) is discarded instead of clobbering newer data.
//! Failures land in [`LoadState::Failed`] so views can tell "load
//! failed" apart from "no rows".

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Expense, ExpenseFilters, ExpensePage, FilterUpdate, ListView};
use crate::state::session::{self, SessionState};

/// Where a list currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Shared list state for one view of `/expenses`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseList {
    pub items: Vec<Expense>,
    pub total: u64,
    pub load: LoadState,
    pub filters: ExpenseFilters,
    pub create_pending: bool,
    fetch_seq: u64,
}

impl ExpenseList {
    /// Start a fetch: clear the rows, mark loading, and return the
    /// sequence number that [`Self::finish_fetch`] must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.items.clear();
        self.load = LoadState::Loading;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when
    /// a newer fetch has started since `seq` was issued.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<ExpensePage, ApiError>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                self.items.clear();
                self.load = LoadState::Failed(e.user_message());
            }
        }
        true
    }

    /// 1-indexed current page.
    pub fn current_page(&self) -> u32 {
        self.filters.offset / self.filters.limit.max(1) + 1
    }

    /// Page count for the pagination control; at least 1.
    #[allow(clippy::cast_possible_truncation)]
    pub fn total_pages(&self) -> u32 {
        let limit = u64::from(self.filters.limit.max(1));
        (self.total.div_ceil(limit).max(1)) as u32
    }
}

/// Fetch the list with the current filters. Errors are recorded in the
/// list state (and funneled through the session on 401), not raised:
/// the page renders the failure from [`LoadState::Failed`].
pub async fn fetch<A: Api>(
    view: ListView,
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
) {
    list.update(|l| {
        l.begin_fetch();
    });
    let snapshot = list.get_untracked();
    let seq = snapshot.fetch_seq;

    let result = api.list_expenses(view, &snapshot.filters).await;
    if let Err(e) = &result {
        session::handle_api_error(session, e);
        leptos::logging::warn!("failed to fetch expenses ({}): {e}", view.as_str());
    }
    list.update(|l| {
        l.finish_fetch(seq, result);
    });
}

/// Jump to a 1-indexed page and re-fetch. No bounds check against the
/// total: a page past the end yields an empty list, not an error.
pub async fn set_page<A: Api>(
    view: ListView,
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
    page: u32,
) {
    list.update(|l| {
        l.filters.offset = page.saturating_sub(1).saturating_mul(l.filters.limit);
    });
    fetch(view, list, session, api).await;
}

/// Apply a filter update (mutual exclusion enforced, offset reset) and
/// re-fetch. Personal view only; the approval queue has no filters.
pub async fn set_filters<A: Api>(
    view: ListView,
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
    update: FilterUpdate,
) {
    list.update(|l| l.filters.apply(update));
    fetch(view, list, session, api).await;
}
