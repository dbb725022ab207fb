#![cfg(test)]
use shelf_common::collections::{Queue, Stack};
use shelf_common::mapping::Mapping;
use shelf_common::value::{Key, Value};

#[test]
fn stack_demo_sequence() {
    let mut stack: Stack<&str> = Stack::new();
    stack.push("first");
    stack.push("second");
    stack.push("third");

    assert_eq!(stack.pop(), Some("third"));
    assert_eq!(stack.as_slice(), &["first", "second"]);

    stack.pop();
    stack.pop();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn queue_demo_sequence() {
    let mut queue: Queue<&str> = Queue::new();
    queue.enqueue("first");
    queue.enqueue("second");
    queue.enqueue("third");

    assert_eq!(queue.dequeue(), Some("first"));
    let rest: Vec<&str> = queue.iter().copied().collect();
    assert_eq!(rest, vec!["second", "third"]);
}

#[test]
fn safe_get_examples() {
    let map: Mapping = [("key1", "value1"), ("key2", "value2")].into_iter().collect();
    let fallback = Value::from("default_value");

    assert_eq!(map.safe_get(&Key::from("key1"), &fallback), &Value::from("value1"));
    assert_eq!(map.safe_get(&Key::from("key3"), &fallback), &fallback);
    assert_eq!(map.safe_get(&Key::from("key3"), &Value::Null), &Value::Null);
}

#[test]
fn associative_examples() {
    let assoc: Mapping = [("name", Value::from("John")), ("age", Value::Int(30))]
        .into_iter()
        .collect();
    let indexed = Mapping::list([1, 2, 3]);
    let mut mixed: Mapping = [(0_i64, "a"), (2, "b")].into_iter().collect();
    mixed.insert("name", "John");

    assert!(assoc.is_associative());
    assert!(!indexed.is_associative());
    assert!(mixed.is_associative());
    assert!(!Mapping::new().is_associative());
}
