use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage call failed: {0}")]
    Backend(String),
}

/// Durable single-slot persistence for the session token
pub trait TokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Browser `localStorage`, one key holding the bare token string
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let raw = LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?;
        Ok(decode_slot(raw))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        LocalStorage::delete(&self.key);
        Ok(())
    }
}

/// Slot contents to token. Also accepts a JSON-quoted token left behind by
/// builds that wrote the slot through serde.
fn decode_slot(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let raw = raw.trim();
    let token = match serde_json::from_str::<String>(raw) {
        Ok(unquoted) if raw.starts_with('"') => unquoted,
        _ => raw.to_string(),
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
pub use memory::MemoryTokenStorage;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_the_slot() {
        let storage = MemoryTokenStorage::default();
        let restarted = storage.clone();

        storage.save("abc123").unwrap();
        assert_eq!(restarted.load().unwrap(), Some("abc123".to_string()));

        restarted.clear().unwrap();
        assert_eq!(storage.peek(), None);
    }

    #[test]
    fn slot_holds_the_bare_token() {
        assert_eq!(decode_slot(Some("abc123".to_string())).as_deref(), Some("abc123"));
        assert_eq!(
            decode_slot(Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b".to_string())).as_deref(),
            Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")
        );
    }

    #[test]
    fn json_quoted_slot_is_unwrapped() {
        assert_eq!(decode_slot(Some("\"abc123\"".to_string())).as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_slot_means_no_token() {
        assert_eq!(decode_slot(None), None);
        assert_eq!(decode_slot(Some(String::new())), None);
        assert_eq!(decode_slot(Some("  ".to_string())), None);
    }
}
