use std::convert::From;
use std::ops::Deref;

/// Outcome of [`UniqueSortedVec::toggle`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Toggled<T> {
    /// The value was absent and has been inserted at given index.
    Selected(usize),
    /// The value was present and has been removed, it is given back.
    Deselected(T),
}

/// A wrapper arround a [`Vec`] that is always sorted and with values repeating
/// at most once.
///
/// ```
/// use date_selection_set::UniqueSortedVec;
///
/// let sorted: UniqueSortedVec<_> = vec!["2024-03-01", "2024-01-15", "2024-03-01"].into();
/// assert_eq!(sorted.as_slice(), &["2024-01-15", "2024-03-01"]);
/// ```
#[repr(transparent)]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct UniqueSortedVec<T>(Vec<T>);

impl<T> UniqueSortedVec<T> {
    /// Create a new empty instance.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T: Ord> UniqueSortedVec<T> {
    /// Insert `value` if it is absent or remove it if it is present, the
    /// collection stays sorted and free of duplicates either way.
    ///
    /// ```
    /// use date_selection_set::{Toggled, UniqueSortedVec};
    ///
    /// let mut sorted: UniqueSortedVec<_> = vec![10, 30].into();
    /// assert_eq!(sorted.toggle(20), Toggled::Selected(1));
    /// assert_eq!(sorted.as_slice(), &[10, 20, 30]);
    /// assert_eq!(sorted.toggle(10), Toggled::Deselected(10));
    /// assert_eq!(sorted.as_slice(), &[20, 30]);
    /// ```
    #[inline]
    pub fn toggle(&mut self, value: T) -> Toggled<T> {
        match self.0.binary_search(&value) {
            Ok(i) => Toggled::Deselected(self.0.remove(i)),
            Err(i) => {
                self.0.insert(i, value);
                Toggled::Selected(i)
            }
        }
    }

    /// Returns true if the slice contains an element with the given value.
    ///
    /// ```
    /// use date_selection_set::UniqueSortedVec;
    ///
    /// let sorted: UniqueSortedVec<_> = vec![10, 40, 30].into();
    /// assert!(sorted.contains(&30));
    /// assert!(!sorted.contains(&50));
    /// ```
    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.0.binary_search(x).is_ok()
    }
}

impl<T: Ord> From<Vec<T>> for UniqueSortedVec<T> {
    #[inline]
    fn from(mut vec: Vec<T>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }
}

impl<T: Ord> FromIterator<T> for UniqueSortedVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: Ord> From<UniqueSortedVec<T>> for Vec<T> {
    #[inline]
    fn from(val: UniqueSortedVec<T>) -> Self {
        val.0
    }
}

impl<T> Deref for UniqueSortedVec<T> {
    type Target = Vec<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a UniqueSortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
