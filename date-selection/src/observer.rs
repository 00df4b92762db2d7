//! Notification of selection changes to registered callbacks.

use std::fmt;

/// Identifier of an observer registered with
/// [`DateSelection::subscribe`](crate::DateSelection::subscribe).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of a toggle.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Selected,
    Deselected,
}

/// A toggle that just happened, as seen by observers.
#[derive(Debug)]
pub struct Change<'a, D> {
    /// The date that was toggled.
    pub date: &'a D,
    /// Whether the date has been added or removed.
    pub kind: ChangeKind,
    /// Whole selection after the toggle, sorted.
    pub dates: &'a [D],
}

/// A callback notified after each toggle.
pub type Observer<D> = Box<dyn FnMut(&Change<'_, D>) + Send + 'static>;

/// Registered observers, called in subscription order.
pub(crate) struct Observers<D> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer<D>)>,
}

impl<D> Observers<D> {
    pub(crate) const fn new() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }

    pub(crate) fn insert(&mut self, observer: Observer<D>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns false if no observer was registered under this id.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.entries.iter().position(|(x, _)| *x == id) else {
            return false;
        };

        drop(self.entries.remove(pos));
        true
    }

    pub(crate) fn notify(&mut self, change: &Change<'_, D>) {
        for (_, observer) in &mut self.entries {
            observer(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<D> fmt::Debug for Observers<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}
