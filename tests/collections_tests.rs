use classics::collections::other::{Order, DEFAULT_CAPACITY};
use classics::{ArrayStack, BinarySearchTree, CircularQueue, DoublyLinkedList};

#[test]
fn test_stack_and_queue_disagree_on_order() {
    let mut stack = ArrayStack::new(5);
    let mut queue = CircularQueue::new(5);
    for v in 1..=5 {
        assert!(stack.push(v));
        assert!(queue.enqueue(v));
    }
    assert!(!stack.push(6));
    assert!(!queue.enqueue(6));

    let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
    let dequeued: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(popped, vec![5, 4, 3, 2, 1]);
    assert_eq!(dequeued, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_default_capacities() {
    assert_eq!(ArrayStack::default().capacity(), DEFAULT_CAPACITY);
    assert_eq!(CircularQueue::default().capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_queue_survives_many_wraps() {
    let mut queue = CircularQueue::new(3);
    for v in 0..100 {
        assert!(queue.enqueue(v));
        if queue.is_full() {
            assert_eq!(queue.dequeue(), Some(v - 2));
        }
    }
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Some(98));
}

#[test]
fn test_linked_list_listings() {
    let mut list = DoublyLinkedList::new();
    for name in ["Joe", "Ann", "Bob", "Ann"] {
        assert!(list.insert(name));
    }
    assert_eq!(list.len(), 4);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Ann", "Bob", "Ann", "Joe"]);

    // Only the first match is removed.
    assert!(list.delete("Ann"));
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Bob", "Ann", "Joe"]);
    assert_eq!(list.fetch("Ann"), Some("Ann"));

    assert!(list.update("Joe", "Jo"));
    assert_eq!(list.front(), Some("Jo"));
    assert_eq!(list.back(), Some("Ann"));
    assert_eq!(format!("{list:?}"), r#"["Jo", "Bob", "Ann"]"#);
}

#[test]
fn test_tree_orders_agree() {
    let mut tree = BinarySearchTree::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(v);
    }
    let ascending = tree.traverse(Order::Lnr);
    let mut descending = tree.traverse(Order::Rnl);
    descending.reverse();
    assert_eq!(ascending, descending);
    assert_eq!(ascending, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);

    // Pre-order starts at the root, post-order ends there.
    assert_eq!(tree.traverse(Order::Nlr).first(), Some(&8));
    assert_eq!(tree.traverse(Order::Lrn).last(), Some(&8));
    assert_eq!(tree.traverse(Order::Nrl).first(), Some(&8));
    assert_eq!(tree.traverse(Order::Rln).last(), Some(&8));
}

#[test]
fn test_tree_delete_every_shape() {
    let mut tree = BinarySearchTree::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(v);
    }
    assert!(tree.delete(3)); // two children
    assert!(tree.delete(14)); // one child
    assert!(tree.delete(13)); // leaf
    assert!(tree.delete(8)); // root
    assert!(!tree.delete(8));
    assert_eq!(tree.traverse(Order::Lnr), vec![1, 4, 6, 7, 10]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.fetch(7), Some(7));
    assert_eq!(tree.fetch(3), None);
}
