use std::error::Error;
use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use log::warn;

use super::{Access, AccessRecord};

/// A place an access record can be kept between sessions.
///
/// Hosts bring their own backends (browser local storage, cookies, a file
/// next to the app). Records pass through this boundary as raw strings;
/// parsing and validation happen in [`StoreStack`].
pub trait AccessStore {
    /// Short name identifying the backend in log output.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Option<String>, StoreError>;
    fn store(&mut self, raw: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Backend that keeps the record in memory, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}
impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore { slot: None }
    }
}
impl AccessStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn store(&mut self, raw: &str) -> Result<(), StoreError> {
        self.slot = Some(raw.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// A prioritized list of stores, fastest first.
///
/// Loading returns the record of the first backend that holds a readable one
/// and writes it back to the backends earlier in the list that missed.
/// Saving and clearing hit every backend. A backend that fails or holds
/// something unreadable is logged and skipped, so one broken store never
/// locks the user out.
pub struct StoreStack {
    stores: Vec<Box<dyn AccessStore>>,
}
impl StoreStack {
    pub fn new(stores: Vec<Box<dyn AccessStore>>) -> Self {
        StoreStack { stores }
    }

    /// The current record, from the highest-priority backend that has one.
    pub fn load(&mut self) -> Option<AccessRecord> {
        let mut found = None;
        for (index, store) in self.stores.iter().enumerate() {
            match store.load() {
                Ok(Some(raw)) => match AccessRecord::from_json(&raw) {
                    Ok(record) => {
                        found = Some((index, record));
                        break;
                    }
                    Err(e) => warn!("Unreadable access record in {} store: {e}", store.name()),
                },
                Ok(None) => {}
                Err(e) => warn!("Failed to read {} store: {e}", store.name()),
            }
        }

        let (index, record) = found?;

        let raw = record.to_json();
        for store in &mut self.stores[..index] {
            if let Err(e) = store.store(&raw) {
                warn!("Failed to backfill {} store: {e}", store.name());
            }
        }

        Some(record)
    }

    /// Persists a record to every backend.
    pub fn save(&mut self, record: &AccessRecord) {
        let raw = record.to_json();
        for store in &mut self.stores {
            if let Err(e) = store.store(&raw) {
                warn!("Failed to write {} store: {e}", store.name());
            }
        }
    }

    /// Wipes the record from every backend.
    pub fn clear(&mut self) {
        for store in &mut self.stores {
            if let Err(e) = store.clear() {
                warn!("Failed to clear {} store: {e}", store.name());
            }
        }
    }

    /// Verdict of the stored record at the given time, if any backend holds one.
    pub fn status(&mut self, now: DateTime<Utc>) -> Option<Access> {
        self.load().map(|record| record.status(now))
    }

    /// Like [`StoreStack::status()`], but against the current time.
    pub fn status_now(&mut self) -> Option<Access> {
        self.status(Utc::now())
    }
}

/// Failure inside a store backend.
#[derive(Debug, PartialEq, Eq)]
pub struct StoreError {
    message: String,
}
impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}
impl Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl Error for StoreError {}
