use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{ApprovedBooking, DaySlots, Document, PendingRequest, Settings};
use crate::services::booking;
use crate::services::settings;
use crate::services::storage::KeyValueStorage;

/// Owns the in-memory document and writes it through to storage under a
/// single key.
pub struct Store {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    doc: Document,
}

impl Store {
    pub fn open(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            doc: Document::default(),
        };
        store.doc = store.load();
        store
    }

    /// Reads the stored document. Anything missing or unreadable yields
    /// the default document.
    pub fn load(&self) -> Document {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored document, starting fresh");
                return Document::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to read stored document, using defaults");
                return Document::default();
            }
        };

        match Document::from_json(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "stored document is corrupt, using defaults");
                Document::default()
            }
        }
    }

    /// Serializes the whole document and overwrites the stored copy.
    pub fn save(&self, doc: &Document) -> AppResult<()> {
        let raw = doc.to_json()?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "document saved");
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn settings(&self) -> &Settings {
        &self.doc.settings
    }

    pub fn pending_requests(&self) -> &[PendingRequest] {
        &self.doc.pending_requests
    }

    pub fn approved_bookings(&self) -> &[ApprovedBooking] {
        &self.doc.approved_bookings
    }

    /// Lazily populated; the new day is written out with the next change.
    pub fn view_day(&mut self, date: NaiveDate) -> &DaySlots {
        booking::view_day(&mut self.doc, date)
    }

    pub fn request(&mut self, date: &str, slot: &str, user: &str) -> AppResult<PendingRequest> {
        self.apply(|doc| booking::request(doc, date, slot, user))
    }

    pub fn approve(&mut self, req: &PendingRequest) -> AppResult<()> {
        self.apply(|doc| booking::approve(doc, req))
    }

    pub fn reject(&mut self, req: &PendingRequest) -> AppResult<()> {
        self.apply(|doc| booking::reject(doc, req))
    }

    pub fn update_settings(&mut self, rate: i64, jazzcash: &str) -> AppResult<()> {
        self.apply(|doc| {
            settings::update_settings(&mut doc.settings, rate, jazzcash);
            Ok(())
        })
    }

    /// Runs a change against a copy and only keeps it once it is saved.
    fn apply<T>(&mut self, change: impl FnOnce(&mut Document) -> AppResult<T>) -> AppResult<T> {
        let mut next = self.doc.clone();
        let out = change(&mut next)?;
        self.save(&next)?;
        self.doc = next;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::errors::AppError;
    use crate::models::SlotStatus;
    use crate::services::storage::sqlite::SqliteStorage;

    const KEY: &str = "club_db";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Clone, Default)]
    struct MemoryStorage {
        values: Arc<Mutex<HashMap<String, String>>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Database(rusqlite::Error::InvalidQuery))
        }

        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Database(rusqlite::Error::InvalidQuery))
        }
    }

    fn sqlite_store() -> Store {
        Store::open(Box::new(SqliteStorage::open(":memory:").unwrap()), KEY)
    }

    #[test]
    fn test_empty_storage_loads_defaults() {
        let store = sqlite_store();
        assert_eq!(store.document(), &Document::default());
        assert_eq!(store.settings().rate, 1500);
        assert_eq!(store.settings().advance, 500);
    }

    #[test]
    fn test_corrupt_document_loads_defaults() {
        let storage = MemoryStorage::default();
        storage.set(KEY, "{not json").unwrap();
        let store = Store::open(Box::new(storage), KEY);
        assert_eq!(store.document(), &Document::default());
    }

    #[test]
    fn test_read_failure_loads_defaults() {
        let store = Store::open(Box::new(BrokenStorage), KEY);
        assert_eq!(store.document(), &Document::default());
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let mut store = Store::open(Box::new(BrokenStorage), KEY);
        let err = store.request("2025-01-01", "09:00", "Alice").unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(store.pending_requests().is_empty());
        assert!(store.document().master_data.is_empty());
    }

    #[test]
    fn test_transitions_are_written_through() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()), KEY);

        let req = store.request("2025-01-01", "09:00", "Alice").unwrap();
        let stored = Document::from_json(&storage.get(KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored.pending_requests, vec![req.clone()]);

        store.approve(&req).unwrap();
        let stored = Document::from_json(&storage.get(KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored.slot_status("2025-01-01", "09:00"), SlotStatus::Booked);
        assert!(stored.pending_requests.is_empty());
        assert_eq!(stored.approved_bookings, vec![req]);
    }

    #[test]
    fn test_save_after_load_round_trips() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()), KEY);
        store.view_day(ymd(2025, 1, 2));
        store.request("2025-01-01", "09:00", "Alice").unwrap();
        store.update_settings(1800, "0311-7654321").unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), loaded);
        assert_eq!(&loaded, store.document());
    }

    #[test]
    fn test_view_day_is_not_saved_on_its_own() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()), KEY);
        assert_eq!(store.view_day(ymd(2025, 1, 1)).len(), 24);
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_invalid_date_is_not_stored() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()), KEY);
        let err = store.request("next tuesday", "09:00", "Alice").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));
        assert!(store.document().master_data.is_empty());
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_update_settings_persists() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()), KEY);
        store.update_settings(2000, "0345-1111111").unwrap();

        let reopened = Store::open(Box::new(storage), KEY);
        assert_eq!(reopened.settings().rate, 2000);
        assert_eq!(reopened.settings().jazzcash, "0345-1111111");
        assert_eq!(reopened.settings().advance, 500);
    }
}
