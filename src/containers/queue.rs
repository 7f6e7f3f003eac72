use crate::containers::DynArray;

/// A FIFO queue over a [`DynArray`] with an independent head cursor.
///
/// Dequeued slots are vacated in place and the head cursor advances past
/// them; the backing array only ever grows at the tail.
///
/// # Example
/// ```
/// use numex::containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("b"));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: DynArray<Option<T>>,
    head:  usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self { items: DynArray::new(),
               head:  0, }
    }

    /// Appends a value at the tail.
    pub fn enqueue(&mut self, value: T) {
        self.items.push(Some(value));
    }

    /// Removes and returns the value at the head, or `None` if the queue
    /// is exhausted.
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.items.get_mut(self.head)?.take();
        if value.is_some() {
            self.head += 1;
        }
        value
    }

    /// Number of values still waiting in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() - self.head
    }

    /// Whether no values are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
