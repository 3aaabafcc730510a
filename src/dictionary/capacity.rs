use super::Dictionary;
use crate::raw::RawDictionary;

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary with room for at least `capacity` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let dict: Dictionary<i32, i32> = Dictionary::with_capacity(32);
    /// assert!(dict.is_empty());
    /// assert!(dict.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            raw: RawDictionary::with_capacity(capacity),
            cursor: None,
        }
    }

    /// Returns the number of pairs the dictionary can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more pairs. Slots left behind by removed
    /// pairs count towards the reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::from([(1, "a")]);
    /// dict.reserve(10);
    /// assert!(dict.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Releases memory held for pairs that are no longer stored, as far as the layout
    /// of the remaining pairs allows.
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
