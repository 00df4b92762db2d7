use std::fmt::Debug;

use date_selection_set::{Toggled, UniqueSortedVec};

use crate::error::{Error, Result};
use crate::observer::{Change, ChangeKind, Observers, SubscriptionId};

/// A set of selected dates, kept sorted and without duplicates.
///
/// Dates are opaque: any `Ord` value is accepted as an identifier, ISO 8601
/// strings being the common case since their lexicographic order matches the
/// chronological one. The selection always starts empty and the only way to
/// alter it is [`DateSelection::toggle_date`].
///
/// ```
/// use date_selection::DateSelection;
///
/// let mut selection = DateSelection::new();
/// selection.toggle_date("2024-03-01".to_string());
/// selection.toggle_date("2024-01-15".to_string());
/// assert_eq!(selection.dates(), ["2024-01-15", "2024-03-01"]);
///
/// selection.toggle_date("2024-01-15".to_string());
/// assert_eq!(selection.dates(), ["2024-03-01"]);
/// ```
pub struct DateSelection<D = String> {
    dates: UniqueSortedVec<D>,
    observers: Observers<D>,
}

impl<D> DateSelection<D> {
    /// Create an empty selection with no observer.
    pub const fn new() -> Self {
        Self { dates: UniqueSortedVec::new(), observers: Observers::new() }
    }

    /// Number of observers currently subscribed.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<D: Ord> DateSelection<D> {
    /// Select `date` if it is not part of the selection yet, deselect it
    /// otherwise. Observers are notified once the selection is updated.
    ///
    /// This never fails: malformed identifiers are stored as is and compared
    /// like any other value.
    ///
    /// ```
    /// use date_selection::DateSelection;
    ///
    /// let mut selection = DateSelection::new();
    /// selection.toggle_date("2024-05-05");
    /// assert!(selection.contains(&"2024-05-05"));
    ///
    /// selection.toggle_date("2024-05-05");
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle_date(&mut self, date: D) {
        match self.dates.toggle(date) {
            Toggled::Selected(i) => self.observers.notify(&Change {
                date: &self.dates[i],
                kind: ChangeKind::Selected,
                dates: &self.dates,
            }),
            Toggled::Deselected(date) => self.observers.notify(&Change {
                date: &date,
                kind: ChangeKind::Deselected,
                dates: &self.dates,
            }),
        }

        #[cfg(feature = "log")]
        log::trace!(count = self.dates.len(); "Toggled date in selection");
    }

    /// Register a callback that will be called after each toggle.
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use date_selection::{ChangeKind, DateSelection};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let mut selection = DateSelection::new();
    ///
    /// selection.subscribe({
    ///     let seen = seen.clone();
    ///     move |change| seen.lock().unwrap().push((*change.date, change.kind))
    /// });
    ///
    /// selection.toggle_date("2024-03-01");
    /// selection.toggle_date("2024-03-01");
    ///
    /// assert_eq!(
    ///     *seen.lock().unwrap(),
    ///     [("2024-03-01", ChangeKind::Selected), ("2024-03-01", ChangeKind::Deselected)],
    /// );
    /// ```
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_, D>) + Send + 'static,
    {
        self.observers.insert(Box::new(observer))
    }

    /// Stop notifying the observer registered under `id`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<()> {
        if self.observers.remove(id) {
            Ok(())
        } else {
            #[cfg(feature = "log")]
            log::warn!("Tried to remove unknown subscription {id}");
            Err(Error::UnknownSubscription(id))
        }
    }

    /// Check if `date` is currently selected.
    pub fn contains(&self, date: &D) -> bool {
        self.dates.contains(date)
    }

    /// Selected dates, in ascending order.
    pub fn dates(&self) -> &[D] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.dates.iter()
    }

    /// Dispose of the selection and its observers, returning the dates that
    /// were selected.
    pub fn into_dates(self) -> Vec<D> {
        self.dates.into()
    }
}

impl<D> Default for DateSelection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Debug> Debug for DateSelection<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateSelection")
            .field("dates", &*self.dates)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<'a, D: Ord> IntoIterator for &'a DateSelection<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
