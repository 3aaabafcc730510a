use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Released slots go on a free list and are handed out again by the next `alloc`, so a
/// handle is only meaningful while the element it was allocated for is still live.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Makes room for at least `additional` more live elements without reallocating.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let reusable = self.free.len();
        self.slots.reserve(additional.saturating_sub(reusable));
    }

    /// Drops trailing vacant slots and returns unused memory to the allocator.
    pub(crate) fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let live_slots = self.slots.len();
        self.free.retain(|h| h.to_index() < live_slots);
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(h) = self.free.pop() {
            self.slots[h.to_index()] = Some(element);
            h
        } else {
            // Strict less-than keeps the live count within `Handle::MAX`.
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    /// Releases every element. The slot table is dropped in one pass, so no link is
    /// followed and depth of the tree does not matter.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
