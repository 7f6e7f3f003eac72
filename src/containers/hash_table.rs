use crate::containers::DynArray;

/// Number of buckets in every table. A power of two, so bucket selection
/// is a bitmask of the hash.
pub const BUCKET_COUNT: usize = 16;

#[derive(Debug, Clone)]
struct Entry<V> {
    hash:  u64,
    key:   String,
    value: V,
}

/// A string-keyed map with separate chaining.
///
/// Each bucket is a [`DynArray`] of entries; keys hash with the classic
/// polynomial rolling hash `h = 31 * h + byte` over the full key. The
/// bucket count is fixed — chains simply get longer under heavy load,
/// which is acceptable for the bounded workloads this crate handles.
///
/// `place` on an existing key overwrites its value in place; `get` on an
/// absent key yields `None`, never an error.
///
/// # Example
/// ```
/// use numex::containers::HashTable;
///
/// let mut table = HashTable::new();
/// table.place("x", 2.0);
/// table.place("x", 5.0);
///
/// assert_eq!(table.get("x"), Some(&5.0));
/// assert_eq!(table.get("y"), None);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    buckets: [DynArray<Entry<V>>; BUCKET_COUNT],
    len:     usize,
}

impl<V> HashTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: std::array::from_fn(|_| DynArray::new()),
               len:     0, }
    }

    fn hash(key: &str) -> u64 {
        key.bytes()
           .fold(0_u64, |h, byte| h.wrapping_mul(31).wrapping_add(u64::from(byte)))
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn bucket_index(hash: u64) -> usize {
        (hash & (BUCKET_COUNT as u64 - 1)) as usize
    }

    /// Binds `key` to `value`, overwriting the value of an existing entry
    /// with the same key.
    pub fn place(&mut self, key: &str, value: V) {
        let hash = Self::hash(key);
        let bucket = &mut self.buckets[Self::bucket_index(hash)];

        for entry in bucket.iter_mut() {
            if entry.hash == hash && entry.key == key {
                entry.value = value;
                return;
            }
        }

        bucket.push(Entry { hash,
                            key: key.to_string(),
                            value });
        self.len += 1;
    }

    /// Looks up the value bound to `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let hash = Self::hash(key);
        let bucket = &self.buckets[Self::bucket_index(hash)];

        bucket.iter()
              .find(|entry| entry.hash == hash && entry.key == key)
              .map(|entry| &entry.value)
    }

    /// Number of distinct keys in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
