use super::{Dictionary, violation};
use crate::error::{DictionaryError, Result};
use crate::raw::Handle;

impl<K, V> Dictionary<K, V> {
    /// Places the cursor on the pair with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if the dictionary holds no pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::from([(2, "b"), (1, "a")]);
    /// dict.begin().unwrap();
    /// assert_eq!(dict.current_key(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn begin(&mut self) -> Result<()> {
        self.cursor = Some(self.raw.first().ok_or_else(|| violation(DictionaryError::Empty("begin")))?);
        Ok(())
    }

    /// Places the cursor on the pair with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if the dictionary holds no pairs.
    pub fn end(&mut self) -> Result<()> {
        self.cursor = Some(self.raw.last().ok_or_else(|| violation(DictionaryError::Empty("end")))?);
        Ok(())
    }

    /// Returns `true` if the cursor sits on a pair.
    #[must_use]
    pub fn has_current(&self) -> bool {
        self.cursor.is_some()
    }

    fn current(&self, method: &'static str) -> Result<Handle> {
        self.cursor.ok_or_else(|| violation(DictionaryError::NoCurrent(method)))
    }

    /// Returns the key of the pair under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NoCurrent`] if the cursor is undefined.
    pub fn current_key(&self) -> Result<&K> {
        let handle = self.current("current_key")?;
        Ok(&self.raw.node(handle).key)
    }

    /// Returns the value of the pair under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NoCurrent`] if the cursor is undefined.
    pub fn current_val(&self) -> Result<&V> {
        let handle = self.current("current_val")?;
        Ok(&self.raw.node(handle).value)
    }

    /// Returns a mutable reference to the value of the pair under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NoCurrent`] if the cursor is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::from([(1, 10), (2, 20)]);
    /// dict.begin().unwrap();
    /// while dict.has_current() {
    ///     *dict.current_val_mut().unwrap() += 1;
    ///     dict.next().unwrap();
    /// }
    /// assert_eq!(dict.values().copied().collect::<Vec<_>>(), [11, 21]);
    /// ```
    pub fn current_val_mut(&mut self) -> Result<&mut V> {
        let handle = self.current("current_val_mut")?;
        Ok(&mut self.raw.node_mut(handle).value)
    }

    /// Moves the cursor to the next pair in ascending key order. Moving past the largest
    /// key leaves the cursor undefined.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NoCurrent`] if the cursor is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::{Dictionary, DictionaryError};
    ///
    /// let mut dict = Dictionary::from([(1, "a")]);
    /// dict.begin().unwrap();
    /// dict.next().unwrap();
    /// assert!(!dict.has_current());
    /// assert_eq!(dict.next(), Err(DictionaryError::NoCurrent("next")));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let handle = self.current("next")?;
        self.cursor = self.raw.successor(handle);
        Ok(())
    }

    /// Moves the cursor to the previous pair in ascending key order. Moving past the
    /// smallest key leaves the cursor undefined.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NoCurrent`] if the cursor is undefined.
    pub fn prev(&mut self) -> Result<()> {
        let handle = self.current("prev")?;
        self.cursor = self.raw.predecessor(handle);
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn walk_forward(dict: &mut Dictionary<i32, i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        if dict.begin().is_err() {
            return keys;
        }
        while let Ok(&key) = dict.current_key() {
            keys.push(key);
            dict.next().unwrap();
        }
        keys
    }

    fn walk_backward(dict: &mut Dictionary<i32, i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        if dict.end().is_err() {
            return keys;
        }
        while let Ok(&key) = dict.current_key() {
            keys.push(key);
            dict.prev().unwrap();
        }
        keys
    }

    #[test]
    fn empty_dictionary_rejects_cursor_operations() {
        let mut dict: Dictionary<i32, i32> = Dictionary::new();
        assert_eq!(dict.begin(), Err(DictionaryError::Empty("begin")));
        assert_eq!(dict.end(), Err(DictionaryError::Empty("end")));
        assert!(!dict.has_current());
        assert_eq!(dict.current_key(), Err(DictionaryError::NoCurrent("current_key")));
        assert_eq!(dict.current_val(), Err(DictionaryError::NoCurrent("current_val")));
        assert_eq!(dict.current_val_mut(), Err(DictionaryError::NoCurrent("current_val_mut")));
        assert_eq!(dict.next(), Err(DictionaryError::NoCurrent("next")));
        assert_eq!(dict.prev(), Err(DictionaryError::NoCurrent("prev")));
    }

    #[test]
    fn prev_before_minimum_unsets_cursor() {
        let mut dict = Dictionary::from([(1, 1), (2, 2)]);
        dict.begin().unwrap();
        dict.prev().unwrap();
        assert!(!dict.has_current());
        assert_eq!(dict.prev(), Err(DictionaryError::NoCurrent("prev")));
    }

    #[test]
    fn cursor_walks_meet() {
        // Mirrors a walk from both ends that stops where the other side started.
        let mut a = Dictionary::from([(1, 100), (2, 2), (4, 4), (9, 9)]);
        let mut b = a.clone();
        b.end().unwrap();
        let mut seen = Vec::new();
        a.begin().unwrap();
        while a.current_key() != b.current_key() {
            seen.push((*a.current_key().unwrap(), *a.current_val().unwrap()));
            a.next().unwrap();
        }
        seen.push((*a.current_key().unwrap(), *a.current_val().unwrap()));
        assert_eq!(seen, [(1, 100), (2, 2), (4, 4), (9, 9)]);
    }

    proptest! {
        #[test]
        fn cursor_visits_every_key_in_order(keys in prop::collection::vec(-500i32..500, 0..200)) {
            let mut dict: Dictionary<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
            let forward = walk_forward(&mut dict);
            prop_assert_eq!(forward.len(), dict.len());
            prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));

            let mut backward = walk_backward(&mut dict);
            prop_assert_eq!(backward.len(), dict.len());
            prop_assert!(backward.windows(2).all(|w| w[0] > w[1]));
            backward.reverse();
            prop_assert_eq!(backward, forward);
        }
    }
}
