use numex::containers::{DynArray, HashTable, Queue, Stack};

#[test]
fn dyn_array_capacity_doubles_from_eight() {
    let mut array = DynArray::new();
    assert_eq!(array.capacity(), 8);

    for i in 0..8 {
        array.push(i);
    }
    assert_eq!(array.capacity(), 8);

    array.push(8);
    assert_eq!(array.capacity(), 16);

    for i in 9..17 {
        array.push(i);
    }
    assert_eq!(array.capacity(), 32);
    assert_eq!(array.len(), 17);
}

#[test]
fn dyn_array_never_shrinks_on_removal() {
    let mut array = DynArray::new();
    for i in 0..20 {
        array.push(i);
    }
    let grown = array.capacity();

    while array.pop().is_some() {}

    assert!(array.is_empty());
    assert_eq!(array.capacity(), grown);
}

#[test]
fn dyn_array_out_of_range_access_is_none() {
    let mut array = DynArray::new();
    array.push("only");

    assert_eq!(array.get(0), Some(&"only"));
    assert_eq!(array.get(1), None);
    assert_eq!(array.get_mut(99), None);
}

#[test]
fn queue_is_first_in_first_out() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Some(1));

    queue.enqueue(4);
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert!(queue.is_empty());
}

#[test]
fn queue_dequeue_on_empty_is_none_not_an_error() {
    let mut queue: Queue<f64> = Queue::new();
    assert_eq!(queue.dequeue(), None);

    queue.enqueue(1.0);
    assert_eq!(queue.dequeue(), Some(1.0));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");

    assert_eq!(stack.peek(), Some(&"b"));
    assert_eq!(stack.pop(), Some("b"));
    assert_eq!(stack.pop(), Some("a"));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn stack_iterates_bottom_up_and_reverses_top_down() {
    let mut stack = Stack::new();
    for i in 0..4 {
        stack.push(i);
    }

    let bottom_up: Vec<_> = stack.iter().copied().collect();
    assert_eq!(bottom_up, vec![0, 1, 2, 3]);

    let top_down: Vec<_> = stack.iter().rev().copied().collect();
    assert_eq!(top_down, vec![3, 2, 1, 0]);
}

#[test]
fn hash_table_round_trips_every_key() {
    let mut table = HashTable::new();
    for i in 0..100 {
        table.place(&format!("key{i}"), f64::from(i));
    }

    assert_eq!(table.len(), 100);
    for i in 0..100 {
        assert_eq!(table.get(&format!("key{i}")), Some(&f64::from(i)));
    }
}

#[test]
fn hash_table_place_overwrites_instead_of_duplicating() {
    let mut table = HashTable::new();
    table.place("x", 2.0);
    table.place("x", 5.0);

    assert_eq!(table.get("x"), Some(&5.0));
    assert_eq!(table.len(), 1);
}

#[test]
fn hash_table_absent_key_is_none_not_an_error() {
    let table: HashTable<f64> = HashTable::new();
    assert_eq!(table.get("missing"), None);
    assert!(table.is_empty());
}
