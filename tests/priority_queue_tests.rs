use heap_sssp::data_structures::{HeapEntry, IndexedMinPriorityQueue, MinPriorityQueue};
use rand::prelude::*;
use rand::rngs::StdRng;

fn priorities<V: Copy>(entries: &[HeapEntry<V, f64>]) -> Vec<f64> {
    entries.iter().map(|entry| entry.priority).collect()
}

#[test]
fn test_dequeue_order_is_non_decreasing() {
    let mut queue = MinPriorityQueue::new();
    let patients = [
        ("fever", 5.0),
        ("gun shot", 1.0),
        ("covid", 4.0),
        ("broken arm", 2.0),
        ("heart attack", 3.0),
    ];
    for (value, priority) in patients {
        queue.enqueue(value, priority);
        assert!(queue.is_heap_ordered());
    }

    let mut order = Vec::new();
    while let Some(entry) = queue.dequeue() {
        assert!(queue.is_heap_ordered());
        order.push(entry.priority);
    }

    assert_eq!(order, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_dequeue_on_empty_queue_returns_none() {
    let mut queue: MinPriorityQueue<&str, f64> = MinPriorityQueue::new();
    assert!(queue.dequeue().is_none());
    assert!(queue.peek().is_none());

    queue.enqueue("only", 3.0);
    assert_eq!(queue.dequeue(), Some(HeapEntry::new("only", 3.0)));
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_bubble_down_with_single_left_child() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue('a', 1.0);
    queue.enqueue('b', 2.0);
    queue.enqueue('c', 3.0);

    // 'c' moves to the root and has only 'b' below it
    assert_eq!(queue.dequeue().map(|entry| entry.value), Some('a'));
    assert_eq!(priorities(queue.entries()), vec![2.0, 3.0]);
    assert_eq!(queue.peek().map(|entry| entry.value), Some('b'));
}

#[test]
fn test_bubble_down_prefers_left_child_on_ties() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue("root", 1.0);
    queue.enqueue("left", 5.0);
    queue.enqueue("right", 5.0);
    queue.enqueue("last", 9.0);

    queue.dequeue();

    let values: Vec<&str> = queue.entries().iter().map(|entry| entry.value).collect();
    assert_eq!(values, vec!["left", "last", "right"]);
    assert!(queue.is_heap_ordered());
}

#[test]
fn test_bubble_down_stops_when_equal_to_children() {
    let mut queue = MinPriorityQueue::new();
    for (value, priority) in [(0, 1.0), (1, 3.0), (2, 3.0), (3, 3.0)] {
        queue.enqueue(value, priority);
    }

    assert_eq!(queue.dequeue().map(|entry| entry.priority), Some(1.0));
    assert_eq!(priorities(queue.entries()), vec![3.0, 3.0, 3.0]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_equal_priorities_all_come_out() {
    let mut queue: MinPriorityQueue<usize, f64> = (0..10).map(|value| (value, 2.0)).collect();
    queue.enqueue(99, 1.0);

    let sorted = queue.into_sorted_vec();
    assert_eq!(sorted[0].value, 99);
    assert_eq!(sorted.len(), 11);
    assert!(sorted[1..].iter().all(|entry| entry.priority == 2.0));
}

#[test]
fn test_heap_order_holds_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut queue = MinPriorityQueue::new();
    let mut model: Vec<f64> = Vec::new();

    for step in 0..2_000 {
        if model.is_empty() || rng.gen_bool(0.6) {
            let priority = rng.gen_range(0..50) as f64;
            queue.enqueue(step, priority);
            model.push(priority);
        } else {
            let entry = queue.dequeue().expect("queue should not be empty");
            let min = model.iter().cloned().fold(f64::INFINITY, f64::min);
            assert_eq!(entry.priority, min);
            let index = model.iter().position(|&p| p == min).unwrap();
            model.swap_remove(index);
        }

        assert!(queue.is_heap_ordered(), "heap order broken at step {}", step);
        assert_eq!(queue.len(), model.len());
    }
}

#[test]
fn test_clear_and_extend() {
    let mut queue = MinPriorityQueue::with_capacity(4);
    queue.extend(vec![("x", 3.0), ("y", 1.0)]);
    assert_eq!(queue.peek().map(|entry| entry.value), Some("y"));

    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn test_indexed_queue_decreases_in_place() {
    let mut queue = IndexedMinPriorityQueue::new();
    assert!(queue.push_or_decrease("a", 5.0));
    assert!(queue.push_or_decrease("b", 3.0));
    assert!(queue.push_or_decrease("c", 4.0));

    // Higher or equal priority is ignored
    assert!(!queue.push_or_decrease("a", 6.0));
    assert!(!queue.push_or_decrease("a", 5.0));
    assert_eq!(queue.priority_of(&"a"), Some(5.0));

    assert!(queue.push_or_decrease("a", 1.0));
    assert_eq!(queue.len(), 3);
    assert!(queue.is_heap_ordered());

    let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|entry| entry.value)).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
    assert!(!queue.contains(&"a"));
}

#[test]
fn test_indexed_queue_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut queue = IndexedMinPriorityQueue::new();
    let mut model = std::collections::HashMap::new();

    for _ in 0..2_000 {
        if model.is_empty() || rng.gen_bool(0.7) {
            let key = rng.gen_range(0..40u32);
            let priority = rng.gen_range(0..100) as f64;
            let changed = queue.push_or_decrease(key, priority);
            let expected = match model.get(&key) {
                Some(&current) => priority < current,
                None => true,
            };
            assert_eq!(changed, expected);
            if expected {
                model.insert(key, priority);
            }
        } else {
            let entry = queue.pop().expect("queue should not be empty");
            let min = model.values().cloned().fold(f64::INFINITY, f64::min);
            assert_eq!(entry.priority, min);
            assert_eq!(model.remove(&entry.value), Some(entry.priority));
        }

        assert!(queue.is_heap_ordered());
        assert_eq!(queue.len(), model.len());
    }
}
