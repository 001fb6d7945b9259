//! Cookie consent record
//!
//! The visitor's choice is stored as one JSON object under
//! [`CONSENT_STORAGE_KEY`]. The banner is shown whenever no readable record
//! exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CONSENT_STORAGE_KEY: &str = "leadq-cookie-consent";

/// Delay before the banner slides in on first visit
pub const BANNER_DELAY_MS: u32 = 1_000;

#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored consent is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The stored consent record. `essential` is always true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPreferences {
    pub essential: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub timestamp: DateTime<Utc>,
}

impl ConsentPreferences {
    pub fn custom(analytics: bool, marketing: bool, at: DateTime<Utc>) -> Self {
        Self {
            essential: true,
            analytics,
            marketing,
            timestamp: at,
        }
    }

    pub fn accept_all(at: DateTime<Utc>) -> Self {
        Self::custom(true, true, at)
    }

    pub fn essential_only(at: DateTime<Utc>) -> Self {
        Self::custom(false, false, at)
    }
}

/// String key/value storage (browser `localStorage` on the client)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConsentError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError>;
}

/// Reads and writes the consent record through a [`KeyValueStore`]
pub struct ConsentManager<K> {
    store: K,
}

impl<K: KeyValueStore> ConsentManager<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// The stored record, `None` if nothing has been saved yet
    pub fn load(&self) -> Result<Option<ConsentPreferences>, ConsentError> {
        match self.store.get(CONSENT_STORAGE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// True unless a readable record exists
    pub fn should_prompt(&self) -> bool {
        !matches!(self.load(), Ok(Some(_)))
    }

    pub fn accept_all(&self, at: DateTime<Utc>) -> Result<ConsentPreferences, ConsentError> {
        self.save(ConsentPreferences::accept_all(at))
    }

    pub fn decline(&self, at: DateTime<Utc>) -> Result<ConsentPreferences, ConsentError> {
        self.save(ConsentPreferences::essential_only(at))
    }

    pub fn save_custom(
        &self,
        analytics: bool,
        marketing: bool,
        at: DateTime<Utc>,
    ) -> Result<ConsentPreferences, ConsentError> {
        self.save(ConsentPreferences::custom(analytics, marketing, at))
    }

    fn save(&self, preferences: ConsentPreferences) -> Result<ConsentPreferences, ConsentError> {
        let raw = serde_json::to_string(&preferences)?;
        self.store.set(CONSENT_STORAGE_KEY, &raw)?;
        Ok(preferences)
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{ConsentError, KeyValueStore};

    /// In-memory store shared between clones, standing in for one browser profile
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, ConsentError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
            self.put_raw(key, value);
            Ok(())
        }
    }
}
