//! Loading slot for one page section.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a section currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState<T> {
    /// Fetch in flight; render a spinner.
    Loading,
    Ready(T),
}

impl<T> SectionState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    state: SectionState<T>,
    live: bool,
}

/// Shared handle to a section's state.
///
/// Clones share the same slot, so the fetch task can hold one while the
/// section holds another. After [`teardown`](Self::teardown), deliveries are
/// dropped and the state stays where it was.
#[derive(Debug)]
pub struct SectionSlot<T> {
    inner: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for SectionSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SectionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SectionSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Slot {
                state: SectionState::Loading,
                live: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a fetch result. Returns `false` if the section was already torn
    /// down and the value was discarded.
    pub fn deliver(&self, value: T) -> bool {
        let mut slot = self.lock();
        if !slot.live {
            tracing::debug!("section torn down, discarding late result");
            return false;
        }
        slot.state = SectionState::Ready(value);
        true
    }

    /// Await `fetch` and deliver its output.
    pub async fn fill<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = T>,
    {
        let value = fetch.await;
        self.deliver(value)
    }

    /// Mark the section as gone. Idempotent.
    pub fn teardown(&self) {
        self.lock().live = false;
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.lock().live
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().state.is_loading()
    }
}

impl<T: Clone> SectionSlot<T> {
    #[must_use]
    pub fn snapshot(&self) -> SectionState<T> {
        self.lock().state.clone()
    }
}
