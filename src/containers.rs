/// A growable, indexable sequence.
///
/// `DynArray` is the storage primitive every other container in this module
/// is built on. It starts with a small fixed capacity and doubles whenever
/// an append would overflow it.
///
/// # Responsibilities
/// - Owns its elements and hands out positional access by index.
/// - Grows by doubling; removal never shrinks the allocation.
pub mod dyn_array;
/// A string-keyed associative map with separate chaining.
///
/// Buckets are `DynArray`s of entries, selected by masking a polynomial
/// rolling hash against a fixed power-of-two bucket count.
///
/// # Responsibilities
/// - Stores one value per distinct key; placing an existing key overwrites.
/// - Resolves collisions by chaining inside the bucket array.
pub mod hash_table;
/// A FIFO adapter over `DynArray`.
///
/// # Responsibilities
/// - Appends at the tail, removes from the head.
/// - Reports exhaustion as an absent value, never as an error.
pub mod queue;
/// A LIFO adapter over `DynArray`.
///
/// # Responsibilities
/// - `push`/`pop`/`peek` on the most recently added element.
/// - Reports exhaustion as an absent value, never as an error.
pub mod stack;

pub use dyn_array::DynArray;
pub use hash_table::HashTable;
pub use queue::Queue;
pub use stack::Stack;
