// ============================================================================
// COMPARATOR - stable, field-keyed, directional ordering of user records
// ============================================================================

use std::cmp::Ordering;

use crate::models::{UserField, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// `aria-sort` value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }

    /// Arrow shown next to the active column title
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// The single active (field, direction) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: UserField,
    pub direction: SortDirection,
}

impl Default for SortDirective {
    fn default() -> Self {
        Self {
            field: UserField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl SortDirective {
    /// Header click: same column flips direction, another column starts ascending
    pub fn clicked(self, field: UserField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Native ordering of one field. A missing `last_login` sorts before any date.
pub fn compare(a: &UserRecord, b: &UserRecord, field: UserField) -> Ordering {
    match field {
        UserField::Id => a.id.cmp(&b.id),
        UserField::Username => a.username.cmp(&b.username),
        UserField::FirstName => a.first_name.cmp(&b.first_name),
        UserField::LastName => a.last_name.cmp(&b.last_name),
        UserField::IsActive => a.is_active.cmp(&b.is_active),
        UserField::LastLogin => a.last_login.cmp(&b.last_login),
        UserField::IsSuperuser => a.is_superuser.cmp(&b.is_superuser),
    }
}

/// New sequence ordered by `directive`. Equal keys keep their input order in
/// both directions; the input is left untouched.
pub fn sorted_by(records: &[UserRecord], directive: SortDirective) -> Vec<UserRecord> {
    let mut indexed: Vec<(usize, &UserRecord)> = records.iter().enumerate().collect();
    // unstable on purpose: the index tie-break already makes it stable
    indexed.sort_unstable_by(|(ia, a), (ib, b)| {
        directive
            .direction
            .apply(compare(a, b, directive.field))
            .then_with(|| ia.cmp(ib))
    });
    indexed.into_iter().map(|(_, record)| record.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: i64, username: &str, is_active: bool, login_day: Option<u32>) -> UserRecord {
        UserRecord {
            id,
            username: username.to_string(),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            is_active,
            is_superuser: id == 1,
            last_login: login_day.map(|d| Utc.with_ymd_and_hms(2021, 3, d, 12, 0, 0).unwrap()),
        }
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user(4, "dave", true, Some(3)),
            user(2, "bob", false, None),
            user(5, "eve", false, Some(1)),
            user(1, "alice", true, Some(3)),
            user(3, "carol", true, None),
        ]
    }

    fn ids(records: &[UserRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    fn directive(field: UserField, direction: SortDirection) -> SortDirective {
        SortDirective { field, direction }
    }

    #[test]
    fn sorts_by_each_native_ordering() {
        let records = sample();
        assert_eq!(ids(&sorted_by(&records, directive(UserField::Id, SortDirection::Asc))), [1, 2, 3, 4, 5]);
        assert_eq!(
            ids(&sorted_by(&records, directive(UserField::Username, SortDirection::Asc))),
            [1, 2, 3, 4, 5]
        );
        assert_eq!(
            ids(&sorted_by(&records, directive(UserField::Username, SortDirection::Desc))),
            [5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let records = sample();
        for field in UserField::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let once = sorted_by(&records, directive(field, direction));
                let twice = sorted_by(&once, directive(field, direction));
                assert_eq!(once, twice, "{:?} {:?}", field, direction);
            }
        }
    }

    #[test]
    fn descending_keeps_tie_order_by_input_index() {
        let records = sample();

        // active: 4, 1, 3 in input order; inactive: 2, 5
        let asc = sorted_by(&records, directive(UserField::IsActive, SortDirection::Asc));
        assert_eq!(ids(&asc), [2, 5, 4, 1, 3]);

        let desc = sorted_by(&records, directive(UserField::IsActive, SortDirection::Desc));
        assert_eq!(ids(&desc), [4, 1, 3, 2, 5]);
    }

    #[test]
    fn missing_last_login_sorts_first_ascending() {
        let records = sample();

        let asc = sorted_by(&records, directive(UserField::LastLogin, SortDirection::Asc));
        assert_eq!(ids(&asc), [2, 3, 5, 4, 1]);

        let desc = sorted_by(&records, directive(UserField::LastLogin, SortDirection::Desc));
        assert_eq!(ids(&desc), [4, 1, 5, 2, 3]);
    }

    #[test]
    fn input_is_not_mutated() {
        let records = sample();
        let before = records.clone();
        let _ = sorted_by(&records, directive(UserField::LastName, SortDirection::Desc));
        assert_eq!(records, before);
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sorted_by(&[], SortDirective::default()).is_empty());
    }

    #[test]
    fn compare_reports_equality() {
        let a = user(1, "same", true, None);
        let b = user(2, "same", true, None);
        assert_eq!(compare(&a, &b, UserField::Username), Ordering::Equal);
        assert_eq!(compare(&a, &b, UserField::Id), Ordering::Less);
    }

    #[test]
    fn clicking_active_column_toggles_direction() {
        let start = SortDirective::default();
        let flipped = start.clicked(UserField::Id);
        assert_eq!(flipped, directive(UserField::Id, SortDirection::Desc));
        assert_eq!(flipped.clicked(UserField::Id), start);
    }

    #[test]
    fn clicking_other_column_starts_ascending() {
        let desc_on_id = directive(UserField::Id, SortDirection::Desc);
        assert_eq!(
            desc_on_id.clicked(UserField::Username),
            directive(UserField::Username, SortDirection::Asc)
        );
    }

    #[test]
    fn direction_labels_follow_aria_sort() {
        assert_eq!(SortDirection::Asc.as_str(), "ascending");
        assert_eq!(SortDirection::Desc.as_str(), "descending");
        assert_eq!(SortDirection::Desc.indicator(), " ▼");
    }
}
