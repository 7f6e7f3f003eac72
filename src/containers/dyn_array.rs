/// Capacity every `DynArray` starts out with.
pub const INITIAL_CAPACITY: usize = 8;

/// An amortized-growth indexable sequence.
///
/// The array starts at [`INITIAL_CAPACITY`] and doubles its capacity each
/// time an append would overflow it, so after `n` appends the capacity is
/// the smallest power of two that is at least `max(8, n)`. Removing
/// elements never gives capacity back.
///
/// Out-of-range access yields `None` rather than panicking.
///
/// # Example
/// ```
/// use numex::containers::DynArray;
///
/// let mut array = DynArray::new();
/// for i in 0..9 {
///     array.push(i);
/// }
///
/// assert_eq!(array.len(), 9);
/// assert_eq!(array.capacity(), 16);
/// assert_eq!(array.get(3), Some(&3));
/// assert_eq!(array.get(100), None);
/// ```
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    items:    Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with the initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { items:    Vec::with_capacity(INITIAL_CAPACITY),
               capacity: INITIAL_CAPACITY, }
    }

    /// Appends a value, doubling the capacity first if the array is full.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.capacity *= 2;
            self.items.reserve(self.capacity - self.items.len());
        }
        self.items.push(value);
    }

    /// Removes and returns the last element, or `None` if the array is
    /// empty. Capacity is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the element at `index`, or `None` if the
    /// index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// the index is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the last element, or `None` if empty.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Number of elements currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity in elements.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the elements in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Drops all elements. Capacity is left untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
