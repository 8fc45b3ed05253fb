use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::KvStorage;

/// Errors concerning persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored blob is not a sequence of [`Registration`]s.
    #[error("stored registrations are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The storage backend refused the write.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// One completed sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Trimmed, non-empty attendee name.
    pub name: String,
    /// Trimmed, non-empty attendee email. Its format is not checked.
    pub email: String,
    /// Free-text event name. Records stored without one read back with an empty event.
    #[serde(default)]
    pub event: String,
}

impl Registration {
    /// Builds a record from raw field values, trimming the name and email.
    ///
    /// Returns `None` if either the name or the email is blank.
    pub fn from_fields(name: &str, email: &str, event: &str) -> Option<Registration> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() {
            None
        } else {
            Some(Registration {
                name: name.to_string(),
                email: email.to_string(),
                event: event.to_string(),
            })
        }
    }
}

/// The ordered, append-only list of [`Registration`]s persisted under a single key.
///
/// Every [`RegistrationStore::append`] is a non-transactional read-modify-write of the whole blob; concurrent
/// writers from other tabs are not reconciled and the last one wins.
pub struct RegistrationStore<S: KvStorage> {
    storage: S,
    key: String,
}

impl<S: KvStorage> RegistrationStore<S> {
    /// Instantiates a store persisting under `key` in `storage`.
    pub fn new(storage: S, key: impl Into<String>) -> RegistrationStore<S> {
        RegistrationStore {
            storage,
            key: key.into(),
        }
    }

    /// Reads every stored registration in insertion order. Absent storage is an empty list.
    pub fn load(&self) -> Result<Vec<Registration>, StoreError> {
        Ok(serde_json::from_value(Value::Array(self.load_raw()?))?)
    }

    /// Appends `registration` to the stored list.
    ///
    /// Existing elements are written back exactly as they were read, unknown keys included. Nothing is written if
    /// the stored blob is not a JSON array.
    pub fn append(&self, registration: Registration) -> Result<(), StoreError> {
        let mut registrations = self.load_raw()?;

        registrations.push(serde_json::to_value(&registration)?);

        let blob = serde_json::to_string(&registrations)?;
        self.storage.set(&self.key, &blob)?;

        log::debug!("{} registrations stored", registrations.len());

        Ok(())
    }

    fn load_raw(&self) -> Result<Vec<Value>, StoreError> {
        match self.storage.get(&self.key) {
            Some(blob) if !blob.is_empty() => Ok(serde_json::from_str(&blob)?),
            _ => Ok(Vec::new()),
        }
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
