use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::{DictionaryError, Result};
use crate::raw::{Handle, RawDictionary};

mod capacity;
mod cursor;
mod render;

/// An ordered dictionary based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the dictionary keeps its pairs sorted by key.
/// Each key appears at most once; storing a value under a key that is already present
/// overwrites the old value in place.
///
/// Besides ordinary lookups, a dictionary carries one internal *cursor*. The cursor is
/// either undefined or sits on one of the stored pairs, and can be placed at either end
/// with [`begin`](Dictionary::begin) / [`end`](Dictionary::end) and moved with
/// [`next`](Dictionary::next) / [`prev`](Dictionary::prev). Stepping past either end
/// leaves the cursor undefined again. The borrowing iterators ([`iter`](Dictionary::iter),
/// [`keys`](Dictionary::keys), [`values`](Dictionary::values)) never touch the cursor.
///
/// The tree is not rebalanced. Inserting keys in sorted order builds a list-shaped tree,
/// and lookups, insertions and removals then take O(n) time.
///
/// # Examples
///
/// ```
/// use bst_dict::{Dictionary, DictionaryError};
///
/// let mut dict = Dictionary::new();
/// for (k, v) in [("2", 2), ("1", 1), ("5", 5), ("4", 4), ("3", 3), ("6", 6)] {
///     dict.set_value(k.to_string(), v);
/// }
/// assert_eq!(dict.len(), 6);
/// assert!(dict.contains("4"));
/// assert!(!dict.contains("7"));
///
/// // overwrite in place
/// dict.set_value("1".to_string(), 100);
/// assert_eq!(dict.get_value("1"), Ok(&100));
/// assert_eq!(dict.len(), 6);
///
/// dict.remove("5")?;
/// assert_eq!(dict.remove("5"), Err(DictionaryError::NotFound("remove")));
///
/// // copies compare by their in-order rendering
/// let copy = dict.clone();
/// assert_eq!(copy, dict);
/// # Ok::<(), DictionaryError>(())
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct Dictionary<K, V> {
    raw: RawDictionary<K, V>,
    cursor: Option<Handle>,
}

/// An iterator over the pairs of a `Dictionary`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`Dictionary`].
///
/// # Examples
///
/// ```
/// use bst_dict::Dictionary;
///
/// let dict = Dictionary::from([(1, "a"), (2, "b")]);
/// let mut iter = dict.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: Dictionary::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawDictionary<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An iterator over the keys of a `Dictionary`.
///
/// This `struct` is created by the [`keys`] method on [`Dictionary`].
///
/// [`keys`]: Dictionary::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `Dictionary`.
///
/// This `struct` is created by the [`values`] method on [`Dictionary`].
///
/// [`values`]: Dictionary::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Logs a precondition violation and hands the error back for `?`.
fn violation(error: DictionaryError) -> DictionaryError {
    tracing::debug!(%error, "precondition violated");
    error
}

impl<K, V> Dictionary<K, V> {
    /// Makes a new, empty `Dictionary` with an undefined cursor.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.set_value(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Dictionary<K, V> {
        Dictionary {
            raw: RawDictionary::new(),
            cursor: None,
        }
    }

    /// Returns the number of pairs in the dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.len(), 0);
    /// dict.set_value(1, "a");
    /// assert_eq!(dict.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the dictionary holds no pairs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every pair and leaves the cursor undefined.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::from([(1, "a")]);
    /// dict.begin().unwrap();
    /// dict.clear();
    /// assert!(dict.is_empty());
    /// assert!(!dict.has_current());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
        self.cursor = None;
    }

    /// Returns `true` if a pair with the given key is present.
    ///
    /// The key may be any borrowed form of the dictionary's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict = Dictionary::from([(1, "a")]);
    /// assert!(dict.contains(&1));
    /// assert!(!dict.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns a reference to the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::{Dictionary, DictionaryError};
    ///
    /// let dict = Dictionary::from([(1, "a")]);
    /// assert_eq!(dict.get_value(&1), Ok(&"a"));
    /// assert_eq!(dict.get_value(&2), Err(DictionaryError::NotFound("get_value")));
    /// ```
    pub fn get_value<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key).ok_or_else(|| violation(DictionaryError::NotFound("get_value")))?;
        Ok(&self.raw.node(handle).value)
    }

    /// Returns a mutable reference to the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::from([(1, 10)]);
    /// *dict.get_value_mut(&1).unwrap() += 5;
    /// assert_eq!(dict.get_value(&1), Ok(&15));
    /// ```
    pub fn get_value_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key).ok_or_else(|| violation(DictionaryError::NotFound("get_value_mut")))?;
        Ok(&mut self.raw.node_mut(handle).value)
    }

    /// Stores `value` under `key`.
    ///
    /// If the key is already present its value is overwritten in place and the old value is
    /// returned; the cursor is not moved, even if it sits on that pair. Otherwise a new
    /// pair is attached as a leaf and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.set_value(37, "a"), None);
    /// assert_eq!(dict.set_value(37, "b"), Some("a"));
    /// assert_eq!(dict.get_value(&37), Ok(&"b"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn set_value(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Removes the pair at `key` and returns its value.
    ///
    /// If the cursor sat on the removed pair it becomes undefined. A cursor on any other
    /// pair stays where it is.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NotFound`] if the key is absent; nothing is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::{Dictionary, DictionaryError};
    ///
    /// let mut dict = Dictionary::from([(1, "a")]);
    /// assert_eq!(dict.remove(&1), Ok("a"));
    /// assert_eq!(dict.remove(&1), Err(DictionaryError::NotFound("remove")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key).ok_or_else(|| violation(DictionaryError::NotFound("remove")))?;
        if self.cursor == Some(handle) {
            tracing::trace!("cursor pair removed, cursor now undefined");
            self.cursor = None;
        }
        let (_, value) = self.raw.remove_node(handle);
        Ok(value)
    }

    /// Returns the pair with the smallest key, or `None` if the dictionary is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict = Dictionary::from([(2, "b"), (1, "a")]);
    /// assert_eq!(dict.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|h| {
            let node = self.raw.node(h);
            (&node.key, &node.value)
        })
    }

    /// Returns the pair with the largest key, or `None` if the dictionary is empty.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|h| {
            let node = self.raw.node(h);
            (&node.key, &node.value)
        })
    }

    /// Gets an iterator over the pairs of the dictionary, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict = Dictionary::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let keys: Vec<_> = dict.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator; O(n) to exhaust it.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the dictionary, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict = Dictionary::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = dict.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the dictionary, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict = Dictionary::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = dict.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Clone + Ord, V: Clone> Clone for Dictionary<K, V> {
    /// Rebuilds the pairs by inserting them in ascending key order. The copy owns its own
    /// nodes and starts with an undefined cursor; its shape follows from that insertion
    /// order rather than from the source tree.
    fn clone(&self) -> Self {
        let mut raw = RawDictionary::with_capacity(self.len());
        raw.insert_in_order_from(&self.raw);
        Dictionary { raw, cursor: None }
    }

    /// Clears `self`, then inserts the pairs of `source` in ascending key order.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.raw.insert_in_order_from(&source.raw);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Ord, V> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set_value(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        let node = self.tree.node(handle);
        self.remaining -= 1;
        self.front = self.tree.successor(handle);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        let node = self.tree.node(handle);
        self.remaining -= 1;
        self.back = self.tree.predecessor(handle);
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining).finish()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.remaining).finish()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn remove_of_cursor_pair_unsets_cursor() {
        let mut dict = Dictionary::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        dict.begin().unwrap();
        dict.next().unwrap();
        assert_eq!(dict.current_key(), Ok(&2));
        assert_eq!(dict.remove(&2), Ok('b'));
        assert!(!dict.has_current());
    }

    #[test]
    fn remove_of_other_pair_keeps_cursor() {
        let mut dict = Dictionary::from([(2, 'b'), (1, 'a'), (4, 'd'), (3, 'c'), (5, 'e')]);
        dict.end().unwrap();
        dict.prev().unwrap();
        assert_eq!(dict.current_key(), Ok(&4));
        // 2 has two children; its successor 3 is relinked into its place.
        dict.remove(&2).unwrap();
        assert_eq!(dict.current_key(), Ok(&4));
        dict.prev().unwrap();
        assert_eq!(dict.current_key(), Ok(&3));
        dict.raw.validate_invariants();
    }

    #[test]
    fn overwrite_keeps_cursor_on_pair() {
        let mut dict = Dictionary::from([(1, 10), (2, 20)]);
        dict.end().unwrap();
        assert_eq!(dict.set_value(2, 200), Some(20));
        assert_eq!(dict.current_key(), Ok(&2));
        assert_eq!(dict.current_val(), Ok(&200));
    }

    #[test]
    fn failed_remove_changes_nothing() {
        let mut dict = Dictionary::from([(1, 10), (2, 20)]);
        dict.begin().unwrap();
        assert_eq!(dict.remove(&3), Err(DictionaryError::NotFound("remove")));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.current_key(), Ok(&1));
    }

    #[test]
    fn clone_from_replaces_contents_and_unsets_cursor() {
        let source = Dictionary::from([(5, 'e'), (3, 'c')]);
        let mut dest = Dictionary::from([(1, 'a'), (9, 'z')]);
        dest.begin().unwrap();
        dest.clone_from(&source);
        assert!(!dest.has_current());
        assert_eq!(dest.iter().collect::<Vec<_>>(), [(&3, &'c'), (&5, &'e')]);
        dest.raw.validate_invariants();
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let dict: Dictionary<i32, i32> = (0..7).map(|i| ((i * 3) % 7, i)).collect();
        let mut iter = dict.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next().map(|(k, _)| *k), Some(0));
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(6));
        let middle: Vec<i32> = iter.by_ref().map(|(k, _)| *k).collect();
        assert_eq!(middle, [1, 2, 3, 4, 5]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(dict.keys().rev().copied().collect::<Vec<_>>(), [6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(dict.values().len(), 7);
    }

    #[test]
    fn key_and_value_iterators_clone_and_debug() {
        let dict = Dictionary::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        let mut keys = dict.keys();
        keys.next();
        let rest = keys.clone();
        assert_eq!(keys.copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(alloc::format!("{rest:?}"), "Keys { remaining: 2 }");

        let mut values = dict.values();
        values.next_back();
        let rest = values.clone();
        assert_eq!(values.copied().collect::<Vec<_>>(), ['a', 'b']);
        assert_eq!(rest.copied().collect::<Vec<_>>(), ['a', 'b']);
        assert_eq!(alloc::format!("{:?}", dict.values()), "Values { remaining: 3 }");
    }

    #[test]
    fn first_and_last_pairs() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.first_key_value(), None);
        assert_eq!(dict.last_key_value(), None);
        dict.extend([(4, "d"), (2, "b"), (8, "h")]);
        assert_eq!(dict.first_key_value(), Some((&2, &"b")));
        assert_eq!(dict.last_key_value(), Some((&8, &"h")));
    }
}
