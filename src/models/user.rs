use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A user as returned by `GET /v1/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
    #[serde(default, deserialize_with = "deserialize_last_login")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Offset timestamps and naive ones (read as UTC). Anything else blanks the
/// field instead of failing the whole listing.
fn deserialize_last_login<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            log::warn!("⚠️ [USERS] Unreadable last_login {:?}, shown as empty", raw);
            None
        })
}

impl UserRecord {
    /// Local date-time for the table, `-` when the user never logged in
    pub fn last_login_label(&self) -> String {
        match self.last_login {
            Some(at) => at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => "-".to_string(),
        }
    }
}

/// Sortable columns, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Username,
    FirstName,
    LastName,
    IsActive,
    LastLogin,
    IsSuperuser,
}

impl UserField {
    pub const ALL: [UserField; 7] = [
        UserField::Id,
        UserField::Username,
        UserField::FirstName,
        UserField::LastName,
        UserField::IsActive,
        UserField::LastLogin,
        UserField::IsSuperuser,
    ];

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            UserField::Id => "ID",
            UserField::Username => "Username",
            UserField::FirstName => "First name",
            UserField::LastName => "Last name",
            UserField::IsActive => "Active",
            UserField::LastLogin => "Last login",
            UserField::IsSuperuser => "Is Superuser",
        }
    }

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Username => "username",
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::IsActive => "is_active",
            UserField::LastLogin => "last_login",
            UserField::IsSuperuser => "is_superuser",
        }
    }
}
