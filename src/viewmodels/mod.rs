pub mod comparator;
pub mod credential_form;
pub mod listing;

pub use comparator::{compare, sorted_by, SortDirection, SortDirective};
pub use credential_form::{CredentialForm, FieldError, FieldName, FieldState};
pub use listing::{settle_fetch, ListingAction, ListingViewModel};
