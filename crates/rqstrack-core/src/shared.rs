//! Mutex-guarded store handle for front ends serving more than one caller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::GrantStore;

/// Clonable handle that serializes access to one `GrantStore`.
#[derive(Clone, Debug)]
pub struct SharedStore {
    inner: Arc<Mutex<GrantStore>>,
}

impl SharedStore {
    #[must_use]
    pub fn new(store: GrantStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with shared access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&GrantStore) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` with exclusive access to the store.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut GrantStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<GrantStore> for SharedStore {
    fn from(store: GrantStore) -> Self {
        Self::new(store)
    }
}
