use super::handle::Handle;

/// A single key/value pair together with its links.
///
/// `left` and `right` are owning in the sense that a node is reachable from the root only
/// through them; `parent` is a back-reference used for upward walks and is never followed
/// when releasing nodes.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates an unlinked node hanging off `parent`.
    pub(crate) fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
