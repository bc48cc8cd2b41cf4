// ============================================================================
// LISTING VIEWMODEL - fetched snapshot + sort directive + username filter
// ============================================================================

use std::rc::Rc;

use crate::models::{UserField, UserRecord};
use crate::services::ApiError;
use crate::stores::SessionStore;
use crate::viewmodels::comparator::{sorted_by, SortDirective};

#[derive(Debug, Clone)]
pub enum ListingAction {
    /// Result of the remote listing call, replaces the snapshot
    Loaded(Vec<UserRecord>),
    /// Remote listing call failed; the table renders with what it has
    Failed,
    /// Column header clicked
    SortBy(UserField),
    Filter(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingViewModel {
    records: Rc<Vec<UserRecord>>,
    directive: SortDirective,
    filter: String,
    settled: bool,
}

impl ListingViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: ListingAction) {
        match action {
            ListingAction::Loaded(records) => self.replace_records(records),
            ListingAction::Failed => self.settled = true,
            ListingAction::SortBy(field) => self.sort_by(field),
            ListingAction::Filter(text) => self.filter = text,
        }
    }

    fn replace_records(&mut self, records: Vec<UserRecord>) {
        self.records = Rc::new(sorted_by(&records, self.directive));
        self.settled = true;
    }

    /// Re-sorts the snapshot we already have; never triggers a fetch
    fn sort_by(&mut self, field: UserField) {
        self.directive = self.directive.clicked(field);
        self.records = Rc::new(sorted_by(&self.records, self.directive));
    }

    /// Whole snapshot in current sort order, filter not applied
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn directive(&self) -> SortDirective {
        self.directive
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// True once the listing call answered, successfully or not
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Rows to render: case-insensitive substring match on username only
    pub fn visible(&self) -> Vec<&UserRecord> {
        if self.filter.is_empty() {
            return self.records.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.records
            .iter()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Turns the result of `GET /v1/users` into the action to dispatch. A token
/// the server rejects also expires the session, so the guard sends the user
/// back to sign-in.
pub fn settle_fetch(store: &SessionStore, result: Result<Vec<UserRecord>, ApiError>) -> ListingAction {
    match result {
        Ok(users) => {
            log::info!("✅ [USERS] {} users loaded", users.len());
            ListingAction::Loaded(users)
        }
        Err(ApiError::Unauthorized) => {
            log::warn!("🔒 [USERS] Token rejected by server");
            store.expire();
            ListingAction::Failed
        }
        Err(e) => {
            log::error!("❌ [USERS] Listing failed: {}", e);
            ListingAction::Failed
        }
    }
}
