//! Property tests checking pool lists against `VecDeque` models.

use std::collections::VecDeque;

use listpool_core::{Handle, ListPool, PoolError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PushFront(i64),
    PushBack(i64),
    Free,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i64>().prop_map(Op::PushFront),
        any::<i64>().prop_map(Op::PushBack),
        Just(Op::Free),
    ]
}

fn contents(pool: &ListPool<i64, u32>, head: Handle<u32>) -> Vec<i64> {
    pool.iter(head).copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn list_matches_deque_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut pool = ListPool::<i64, u32>::new();
        let mut head = pool.new_list();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    head = pool.push_front(v, head).unwrap();
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    let was_empty = pool.is_empty(head);
                    let returned = pool.push_back(v, head).unwrap();
                    if was_empty {
                        prop_assert!(!pool.is_empty(returned));
                    } else {
                        prop_assert_eq!(returned, head);
                    }
                    head = returned;
                    model.push_back(v);
                }
                Op::Free => {
                    let before = pool.size();
                    head = pool.free(head).unwrap();
                    model.pop_front();
                    prop_assert_eq!(pool.size(), before);
                }
            }
            prop_assert_eq!(pool.is_empty(head), model.is_empty());
            prop_assert_eq!(contents(&pool, head), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn free_then_push_never_grows(values in proptest::collection::vec(any::<i64>(), 1..32)) {
        let mut pool = ListPool::<i64, u32>::new();
        let mut head = pool.new_list();
        for &v in &values {
            head = pool.push_front(v, head).unwrap();
        }
        let size = pool.size();

        for &v in &values {
            let rest = pool.free(head).unwrap();
            head = pool.push_front(v, rest).unwrap();
            prop_assert_eq!(pool.size(), size);
        }
    }

    #[test]
    fn free_list_slots_absorb_the_same_number_of_pushes(
        lengths in proptest::collection::vec(1usize..16, 1..6),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut pool = ListPool::<i64, u32>::new();
        let mut heads = Vec::new();
        for (n, &len) in lengths.iter().enumerate() {
            let mut head = pool.new_list();
            for i in 0..len {
                head = pool.push_back((n * 100 + i) as i64, head).unwrap();
            }
            heads.push(head);
        }
        let size = pool.size();

        let victim = victim.index(heads.len());
        let freed = lengths[victim];
        let emptied = pool.free_list(heads[victim]).unwrap();
        prop_assert!(pool.is_empty(emptied));

        // Refill a fresh list from the reclaimed slots.
        let mut refill = pool.new_list();
        for i in 0..freed {
            refill = pool.push_back(i as i64, refill).unwrap();
        }
        prop_assert_eq!(pool.size(), size);
        prop_assert_eq!(contents(&pool, refill), (0..freed as i64).collect::<Vec<_>>());

        // Untouched lists are intact.
        for (n, (&head, &len)) in heads.iter().zip(&lengths).enumerate() {
            if n == victim {
                continue;
            }
            let expected: Vec<i64> = (0..len).map(|i| (n * 100 + i) as i64).collect();
            prop_assert_eq!(contents(&pool, head), expected);
        }
    }

    #[test]
    fn invalid_handles_never_mutate(extra in 1u32..1000, len in 0usize..8) {
        let mut pool = ListPool::<i64, u32>::new();
        let mut head = pool.new_list();
        for i in 0..len {
            head = pool.push_front(i as i64, head).unwrap();
        }
        let size = pool.size();
        let bogus = Handle::from_raw(size as u32 + extra);

        let rejected = [
            pool.push_front(0, bogus).err(),
            pool.push_back(0, bogus).err(),
            pool.free(bogus).err(),
            pool.free_list(bogus).err(),
            pool.value(bogus).err(),
        ];
        for err in rejected {
            prop_assert!(
                matches!(err, Some(PoolError::OutOfRange { .. })),
                "unexpected result {:?}",
                err
            );
        }
        prop_assert_eq!(pool.size(), size);
        prop_assert_eq!(pool.iter(head).count(), len);
    }
}

#[test]
fn sentinel_accessors_report_empty_list() {
    let mut pool = ListPool::<i64>::new();
    pool.push_front(1, pool.new_list()).unwrap();

    let empty = pool.new_list();
    assert!(matches!(pool.value(empty), Err(PoolError::EmptyList)));
    assert!(matches!(pool.next(empty), Err(PoolError::EmptyList)));
    assert!(matches!(
        pool.value(Handle::from_raw(pool.size() + 1)),
        Err(PoolError::OutOfRange { .. })
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let err = PoolError::OutOfRange { index: 5, size: 3 };
    assert_eq!(err.to_string(), "index 5 is out of range for a pool of 3 nodes");
    assert_eq!(PoolError::EmptyList.to_string(), "operation requires a non-empty list");
}

#[test]
fn allocation_failure_keeps_its_cause_in_the_source_chain() {
    use std::error::Error;

    let mut pool = ListPool::<i64>::new();
    let err = pool.reserve(usize::MAX).unwrap_err();
    assert!(matches!(err, PoolError::Allocation(_)));
    assert_eq!(err.to_string(), "failed to grow node storage");

    let cause = err.source().expect("allocation error carries its cause");
    assert!(!err.to_string().contains(&cause.to_string()));
}
