use proptest_derive::Arbitrary;

use super::*;
use proptest::prelude::*;
use std::collections::VecDeque;

// simple enum to allow pushes and pops in any order
#[derive(Debug, Clone, Copy, Arbitrary)]
enum DequeOps<T> {
    PushFront(T),
    PopFront,
    PushBack(T),
    PopBack,
}

// uniform ops keep the deque small, so this leans on pushes to cross segment boundaries and force growth
fn push_heavy_ops() -> impl Strategy<Value = Vec<DequeOps<i32>>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(DequeOps::PushFront),
        3 => any::<i32>().prop_map(DequeOps::PushBack),
        1 => Just(DequeOps::PopFront),
        1 => Just(DequeOps::PopBack),
    ];
    proptest::collection::vec(op, 0..2000)
}

fn apply<T: Clone, A: AnchorBehavior>(
    deque: &mut BlockDeque<T, FrontToBack, A>,
    model: &mut VecDeque<T>,
    op: &DequeOps<T>,
) {
    match op {
        DequeOps::PushFront(item) => {
            deque.push_front(item.clone());
            model.push_front(item.clone());
        }
        DequeOps::PopFront => assert_eq!(deque.pop_front().is_some(), model.pop_front().is_some()),
        DequeOps::PushBack(item) => {
            deque.push_back(item.clone());
            model.push_back(item.clone());
        }
        DequeOps::PopBack => assert_eq!(deque.pop_back().is_some(), model.pop_back().is_some()),
    }
}

fn contents<T: Clone, A: AnchorBehavior>(deque: &BlockDeque<T, FrontToBack, A>) -> Vec<T> {
    (0..deque.len()).map(|i| deque[i].clone()).collect()
}

proptest! {
    // Test that no combination of pushes and pops of i32 will cause the deque to panic
    #[test]
    fn test_push_pop(ref ops in proptest::collection::vec(any::<DequeOps<i32>>(), 0..100)) {
        let mut deque = BlockDeque::new();
        for &op in ops.iter() {
            match op {
                DequeOps::PushFront(item) => deque.push_front(item),
                DequeOps::PopFront => { let _ = deque.pop_front(); },
                DequeOps::PushBack(item) => deque.push_back(item),
                DequeOps::PopBack => { let _ = deque.pop_back(); },
            }
        }
    }

    // Test that pushing i32s to the front and back maintains the correct order
    #[test]
    fn test_push_front_back_ops(ref ops in proptest::collection::vec(any::<DequeOps<i32>>(), 0..100)) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        prop_assert_eq!(contents(&deque), Vec::from(model_deque));
    }

    // Test that pushing strings to the front and back maintains the correct order
    #[test]
    fn test_push_front_back_ops_string(ref ops in proptest::collection::vec(any::<DequeOps<String>>(), 0..100)) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        prop_assert_eq!(contents(&deque), Vec::from(model_deque));
    }

    // Same as above, with enough pushes to span many segments and several growths
    #[test]
    fn test_growth_matches_model(ref ops in push_heavy_ops()) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        prop_assert_eq!(deque.len(), model_deque.len());
        prop_assert_eq!(contents(&deque), Vec::from(model_deque));
    }

    #[test]
    fn test_growth_matches_model_centered(ref ops in push_heavy_ops()) {
        let mut deque = BlockDeque::<i32>::new_with_anchor::<Centered>();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        prop_assert_eq!(contents(&deque), Vec::from(model_deque));
    }

    // Test that the length is always the number of pushes minus the number of pops that returned an element
    #[test]
    fn test_len_counts_pushes_and_pops(ref ops in push_heavy_ops()) {
        let mut deque = BlockDeque::new();
        let mut pushes = 0usize;
        let mut pops = 0usize;
        for &op in ops.iter() {
            match op {
                DequeOps::PushFront(item) => { deque.push_front(item); pushes += 1; },
                DequeOps::PushBack(item) => { deque.push_back(item); pushes += 1; },
                DequeOps::PopFront => pops += usize::from(deque.pop_front().is_some()),
                DequeOps::PopBack => pops += usize::from(deque.pop_back().is_some()),
            }
            prop_assert_eq!(deque.len(), pushes - pops);
        }
    }

    // Test that indexing yields what popping from the front would, without changing the deque
    #[test]
    fn test_index_matches_front_pops(ref ops in push_heavy_ops()) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        let indexed = contents(&deque);
        let len = deque.len();
        let mut drained = deque.clone();
        let mut popped = Vec::new();
        while let Some(item) = drained.pop_front() {
            popped.push(item);
        }
        prop_assert_eq!(&indexed, &popped);
        prop_assert_eq!(deque.len(), len);
        prop_assert_eq!(contents(&deque), indexed);
    }

    // Test that mutating a clone never shows up in the original
    #[test]
    fn test_clone_is_independent(ref ops in push_heavy_ops(), ref later in push_heavy_ops()) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        let snapshot = contents(&deque);
        let mut copy = deque.clone();
        let mut copy_model = model_deque.clone();
        for op in later.iter() {
            apply(&mut copy, &mut copy_model, op);
        }
        for i in 0..copy.len() {
            copy[i] = copy[i].wrapping_add(1);
        }
        prop_assert_eq!(contents(&deque), snapshot);
    }

    // Test that growing the ring never loses, duplicates, or reorders elements
    #[test]
    fn test_growth_is_transparent(ref ops in push_heavy_ops(), to_back in any::<bool>()) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        let before = contents(&deque);
        let segments = deque.segment_count();
        let mut pushed = 0;
        while deque.segment_count() == segments {
            if to_back {
                deque.push_back(i32::MAX - pushed);
            } else {
                deque.push_front(i32::MAX - pushed);
            }
            pushed += 1;
        }
        prop_assert_eq!(deque.segment_count(), segments * 2);

        let after = contents(&deque);
        let pushed = pushed as usize;
        prop_assert_eq!(after.len(), before.len() + pushed);
        if to_back {
            prop_assert_eq!(&after[..before.len()], &before[..]);
            let expected: Vec<i32> = (0..pushed as i32).map(|i| i32::MAX - i).collect();
            prop_assert_eq!(&after[before.len()..], &expected[..]);
        } else {
            prop_assert_eq!(&after[pushed..], &before[..]);
            let expected: Vec<i32> = (0..pushed as i32).rev().map(|i| i32::MAX - i).collect();
            prop_assert_eq!(&after[..pushed], &expected[..]);
        }
    }

    // Test that a cleared deque behaves like a freshly constructed one
    #[test]
    fn test_clear_acts_like_new(ref ops in push_heavy_ops(), ref later in push_heavy_ops()) {
        let mut deque = BlockDeque::new();
        let mut model_deque = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model_deque, op);
        }
        let segments = deque.segment_count();
        deque.clear();
        prop_assert_eq!(deque.len(), 0);
        prop_assert_eq!(deque.segment_count(), segments);

        let mut fresh = BlockDeque::new();
        let mut cleared_model = VecDeque::new();
        let mut fresh_model = VecDeque::new();
        for op in later.iter() {
            apply(&mut deque, &mut cleared_model, op);
            apply(&mut fresh, &mut fresh_model, op);
        }
        prop_assert_eq!(&deque, &fresh);
        prop_assert_eq!(contents(&deque), Vec::from(cleared_model));
    }
}
