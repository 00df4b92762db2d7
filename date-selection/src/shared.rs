//! A selection shared between several owners.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::observer::{Change, SubscriptionId};
use crate::selection::DateSelection;

/// Cloneable handle over a single [`DateSelection`].
///
/// All clones address the same selection, accesses are serialized with a
/// mutex. Observers are called while the lock is held: they must not use the
/// handle that notified them.
///
/// ```
/// use date_selection::SelectionHandle;
///
/// let calendar = SelectionHandle::new();
/// let summary = calendar.clone();
///
/// calendar.toggle_date("2024-03-01".to_string());
/// calendar.toggle_date("2024-01-15".to_string());
/// assert_eq!(summary.dates(), ["2024-01-15", "2024-03-01"]);
/// ```
pub struct SelectionHandle<D = String>(Arc<Mutex<DateSelection<D>>>);

impl<D> SelectionHandle<D> {
    /// Create a handle over a new empty selection.
    pub fn new() -> Self {
        Self::from(DateSelection::new())
    }

    /// Run `func` with a shared access to the selection.
    pub fn read<T>(&self, func: impl FnOnce(&DateSelection<D>) -> T) -> T {
        func(&*self.lock())
    }

    /// Get the selection back if this is its last handle, the handle is
    /// returned unchanged otherwise.
    pub fn into_inner(self) -> std::result::Result<DateSelection<D>, Self> {
        Arc::try_unwrap(self.0)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(Self)
    }

    fn lock(&self) -> MutexGuard<'_, DateSelection<D>> {
        // Dates are always left consistent by `toggle_date`, a panicking
        // observer only interrupts notifications.
        self.0.lock().unwrap_or_else(|err| {
            #[cfg(feature = "log")]
            log::warn!("Recovering date selection from a poisoned lock");
            err.into_inner()
        })
    }
}

impl<D: Ord> SelectionHandle<D> {
    /// See [`DateSelection::toggle_date`].
    pub fn toggle_date(&self, date: D) {
        self.lock().toggle_date(date)
    }

    /// See [`DateSelection::subscribe`].
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_, D>) + Send + 'static,
    {
        self.lock().subscribe(observer)
    }

    /// See [`DateSelection::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<()> {
        self.lock().unsubscribe(id)
    }

    pub fn contains(&self, date: &D) -> bool {
        self.lock().contains(date)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<D: Ord + Clone> SelectionHandle<D> {
    /// Snapshot of the selected dates, in ascending order.
    pub fn dates(&self) -> Vec<D> {
        self.lock().dates().to_vec()
    }
}

impl<D> Clone for SelectionHandle<D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<D> Default for SelectionHandle<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> From<DateSelection<D>> for SelectionHandle<D> {
    fn from(selection: DateSelection<D>) -> Self {
        Self(Arc::new(Mutex::new(selection)))
    }
}

impl<D: Debug> Debug for SelectionHandle<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SelectionHandle").field(&*self.lock()).finish()
    }
}
