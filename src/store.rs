use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

/// Read/write access to feature flags.
///
/// Implementations must be safe to share between request handlers. An
/// unknown key reads as `false`; neither operation can fail.
#[async_trait]
pub trait FlagStore: Send + Sync + 'static {
    /// Current value of `key`, or `false` if it was never set
    async fn get_flag(&self, key: &str) -> bool;

    /// Create or replace the value of `key`
    async fn set_flag(&self, key: String, value: bool);
}

/// In-memory flag store
///
/// Readers share the lock, writers take it exclusively, so a read always
/// sees a completed write.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: RwLock<HashMap<String, bool>>,
}

impl MemoryFlagStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> bool {
        // A poisoned map of bools is still consistent, keep serving it.
        let flags = self.flags.read().unwrap_or_else(PoisonError::into_inner);
        flags.get(key).copied().unwrap_or(false)
    }

    /// Set a key to the given value
    pub fn set(&self, key: String, value: bool) {
        let mut flags = self.flags.write().unwrap_or_else(PoisonError::into_inner);
        flags.insert(key, value);
    }

    /// Number of keys that have been set
    pub fn len(&self) -> usize {
        self.flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no key has been set yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn get_flag(&self, key: &str) -> bool {
        self.get(key)
    }

    async fn set_flag(&self, key: String, value: bool) {
        self.set(key, value)
    }
}
