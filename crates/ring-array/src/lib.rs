//! A fixed-capacity ring array with push and rotate at both ends.
//!
//! Storage is an inline `[T; N]`; nothing is allocated after construction. Pushing into a full
//! [`RingArray`] silently overwrites the element at the opposite end.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use tracing::{debug, trace};

mod compare;
mod error;

pub use compare::Arithmetic;
pub use error::{Result, RingArrayError};

/// A circular buffer of at most `N` elements.
///
/// `head` and `tail` are purely slot indices and the live element count is tracked in `len`, so
/// `head == tail` is unambiguous: it holds both when the array is empty and when it is full.
#[derive(Clone, Copy)]
pub struct RingArray<T, const N: usize> {
    storage: [T; N],
    /// slot of the logical front
    head: usize,
    /// slot one past the logical back, i.e. the next slot `push_back` writes
    tail: usize,
    len: usize,
}

impl<T, const N: usize> RingArray<T, N> {
    const fn wrap_add(slot: usize, addend: usize) -> usize {
        (slot + addend) % N
    }

    // `subtrahend <= N` everywhere this is called
    const fn wrap_sub(slot: usize, subtrahend: usize) -> usize {
        (slot + N - subtrahend) % N
    }

    fn from_storage(storage: [T; N], len: usize) -> Self {
        const { assert!(N > 0, "ring array capacity must be non-zero") };
        debug_assert!(len <= N, "length {len} exceeds capacity {}", N);

        Self {
            storage,
            head: 0,
            tail: len % N,
            len,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// The raw backing storage in physical slot order.
    ///
    /// Physical order only matches logical order until the array first wraps around, and slots
    /// outside the live window hold stale values. Use [`Self::get`] for logical access.
    #[must_use]
    pub const fn as_slice(&self) -> &[T; N] {
        &self.storage
    }

    /// Forgets every element. Stale values stay in their slots until overwritten.
    pub const fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Inserts `value` as the new front.
    ///
    /// When the array is full the current back element is overwritten and the length stays at
    /// `N`.
    pub fn push_front(&mut self, value: T) {
        self.head = Self::wrap_sub(self.head, 1);

        if self.is_full() {
            trace!(slot = self.head, "push_front evicted the back element");
            self.tail = self.head;
        } else {
            self.len += 1;
        }

        self.storage[self.head] = value;
    }

    /// Inserts `value` as the new back.
    ///
    /// When the array is full the current front element is overwritten and the front advances
    /// by one slot.
    pub fn push_back(&mut self, value: T) {
        let slot = self.tail;
        self.storage[slot] = value;
        self.tail = Self::wrap_add(slot, 1);

        if self.is_full() {
            trace!(slot, "push_back evicted the front element");
            self.head = self.tail;
        } else {
            self.len += 1;
        }
    }

    pub fn front(&self) -> Result<&T> {
        self.ensure_non_empty()?;
        Ok(&self.storage[self.head])
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.ensure_non_empty()?;
        Ok(&mut self.storage[self.head])
    }

    pub fn back(&self) -> Result<&T> {
        self.ensure_non_empty()?;
        Ok(&self.storage[self.back_slot()])
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.ensure_non_empty()?;
        let slot = self.back_slot();
        Ok(&mut self.storage[slot])
    }

    /// Moves the front element to the back and returns it.
    ///
    /// This is a rotation, not a pop: the length is unchanged, and calling it `len()` times in a
    /// row brings the original front back to the front.
    pub fn rotate_front(&mut self) -> Result<&T> {
        self.ensure_non_empty()?;

        // when full `head == tail` and the swap is a no-op
        let slot = self.tail;
        self.storage.swap(self.head, slot);
        self.head = Self::wrap_add(self.head, 1);
        self.tail = Self::wrap_add(self.tail, 1);

        Ok(&self.storage[slot])
    }

    /// Moves the back element to the front and returns it. Mirror of [`Self::rotate_front`].
    pub fn rotate_back(&mut self) -> Result<&T> {
        self.ensure_non_empty()?;

        self.head = Self::wrap_sub(self.head, 1);
        self.tail = Self::wrap_sub(self.tail, 1);
        // the old back now sits at `tail`, just outside the window
        self.storage.swap(self.tail, self.head);

        Ok(&self.storage[self.head])
    }

    /// The element `index` positions behind the front.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.storage[slot])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(&mut self.storage[slot])
    }

    /// A copy of the element `index` positions behind the front.
    pub fn at(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.get(index).cloned()
    }

    const fn back_slot(&self) -> usize {
        Self::wrap_sub(self.tail, 1)
    }

    const fn slot(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(RingArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(Self::wrap_add(self.head, index))
    }

    const fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(RingArrayError::EmptyContainer);
        }
        Ok(())
    }
}

impl<T: Default, const N: usize> RingArray<T, N> {
    /// An empty array with every slot default-initialized.
    #[must_use]
    pub fn new() -> Self {
        Self::from_storage(std::array::from_fn(|_| T::default()), 0)
    }

    /// Loads `values` into slots `0..values.len()`, front first.
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::load(values.iter().cloned())
    }

    fn load<I>(values: I) -> Result<Self>
    where
        I: ExactSizeIterator<Item = T>,
    {
        let len = values.len();
        if len > N {
            debug!(len, capacity = N, "rejected bulk load larger than capacity");
            return Err(RingArrayError::CapacityExceeded { len, capacity: N });
        }

        let mut storage: [T; N] = std::array::from_fn(|_| T::default());
        for (slot, value) in storage.iter_mut().zip(values) {
            *slot = value;
        }

        Ok(Self::from_storage(storage, len))
    }
}

impl<T: Default, const N: usize> Default for RingArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize, const L: usize> TryFrom<[T; L]> for RingArray<T, N> {
    type Error = RingArrayError;

    fn try_from(values: [T; L]) -> Result<Self> {
        Self::load(values.into_iter())
    }
}

impl<'a, T: Clone + Default, const N: usize> TryFrom<&'a [T]> for RingArray<T, N> {
    type Error = RingArrayError;

    fn try_from(values: &'a [T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> Index<usize> for RingArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T, const N: usize> IndexMut<usize> for RingArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|index| &self[index]))
            .finish()
    }
}
