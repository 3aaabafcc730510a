use core::fmt::{self, Display};

use alloc::string::{String, ToString};

use super::Dictionary;

impl<K: Display, V> Dictionary<K, V> {
    /// Renders the keys in preorder, one `"<key>\n"` line per node.
    ///
    /// Unlike the [`Display`] rendering this exposes the shape of the tree, so two
    /// dictionaries with equal pairs can render differently here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// for k in [2, 1, 5, 4, 3, 6] {
    ///     dict.set_value(k, ());
    /// }
    /// assert_eq!(dict.pre_order_string(), "2\n1\n5\n4\n3\n6\n");
    /// ```
    #[must_use]
    pub fn pre_order_string(&self) -> String {
        PreOrder(self).to_string()
    }
}

/// Preorder key lines of a dictionary, rendered by [`Dictionary::pre_order_string`].
struct PreOrder<'a, K, V>(&'a Dictionary<K, V>);

impl<K: Display, V> Display for PreOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = &self.0.raw;
        for handle in raw.pre_order() {
            writeln!(f, "{}", raw.node(handle).key)?;
        }
        Ok(())
    }
}

impl<K: Display, V: Display> Dictionary<K, V> {
    /// Returns `true` if both dictionaries render to the same in-order text, which means
    /// they hold the same pairs regardless of tree shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Dictionary;
    ///
    /// let a = Dictionary::from([(1, 10), (2, 20), (3, 30)]);
    /// let b = Dictionary::from([(3, 30), (1, 10), (2, 20)]);
    /// assert!(a.equals(&b));
    /// assert_ne!(a.pre_order_string(), b.pre_order_string());
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// One `"<key> : <value>\n"` line per pair, in ascending key order.
impl<K: Display, V: Display> Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self {
            writeln!(f, "{key} : {value}")?;
        }
        Ok(())
    }
}

impl<K: Display, V: Display> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
