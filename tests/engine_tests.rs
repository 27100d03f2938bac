// Integration tests for the step engines

use sortty::engine::{AlgorithmKind, EngineError, HighlightRole, SortOrder, StepEngine};
use sortty::sequence::SequenceState;

/// Drive an engine to completion, returning the number of mutating ticks
fn run_to_completion(engine: &mut dyn StepEngine, seq: &mut SequenceState) -> usize {
    let mut mutating = 0;
    loop {
        let step = engine.advance(seq).expect("advance during active run");
        if step.done {
            return mutating;
        }
        mutating += 1;
    }
}

/// Sorted multiset copy of `values` under `order`, for comparison
fn sorted_copy(values: &[i32], order: SortOrder) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    if order == SortOrder::Descending {
        expected.reverse();
    }
    expected
}

#[test]
fn bubble_sorts_and_preserves_multiset() {
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let input = vec![5, 2, 9, 1, 5, 6, 0, -3, 9];
        let mut seq = SequenceState::new(input.clone()).expect("non-empty list");
        let mut engine = AlgorithmKind::Bubble.build(order);

        run_to_completion(engine.as_mut(), &mut seq);
        assert_eq!(seq.snapshot(), sorted_copy(&input, order).as_slice());
    }
}

#[test]
fn insertion_sorts_and_preserves_multiset() {
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let input = vec![7, 7, -1, 42, 3, 0, 42, 8];
        let mut seq = SequenceState::new(input.clone()).expect("non-empty list");
        let mut engine = AlgorithmKind::Insertion.build(order);

        run_to_completion(engine.as_mut(), &mut seq);
        assert_eq!(seq.snapshot(), sorted_copy(&input, order).as_slice());
    }
}

#[test]
fn every_mutating_tick_is_one_adjacent_swap() {
    for kind in [AlgorithmKind::Bubble, AlgorithmKind::Insertion] {
        let mut seq = SequenceState::new(vec![9, 3, 7, 1, 8, 2]).expect("non-empty list");
        let mut engine = kind.build(SortOrder::Ascending);

        loop {
            let before = seq.snapshot().to_vec();
            let step = engine.advance(&mut seq).expect("advance during active run");
            let after = seq.snapshot().to_vec();

            if step.done {
                assert_eq!(before, after, "the done tick must not mutate");
                break;
            }

            // Exactly one adjacent pair differs, and it was swapped
            let changed: Vec<usize> = (0..before.len())
                .filter(|&i| before[i] != after[i])
                .collect();
            assert_eq!(changed.len(), 2, "{:?}: one swap per tick", kind);
            let (a, b) = (changed[0], changed[1]);
            assert_eq!(b, a + 1, "{:?}: swapped indices must be adjacent", kind);
            assert_eq!(before[a], after[b]);
            assert_eq!(before[b], after[a]);
        }
    }
}

#[test]
fn advance_after_done_fails_with_exhausted() {
    let mut seq = SequenceState::new(vec![2, 1]).expect("non-empty list");
    let mut engine = AlgorithmKind::Bubble.build(SortOrder::Ascending);

    run_to_completion(engine.as_mut(), &mut seq);
    assert!(matches!(
        engine.advance(&mut seq),
        Err(EngineError::Exhausted)
    ));
    // And it stays exhausted: never a silent no-op
    assert!(matches!(
        engine.advance(&mut seq),
        Err(EngineError::Exhausted)
    ));
}

#[test]
fn repeated_runs_are_deterministic() {
    for kind in [AlgorithmKind::Bubble, AlgorithmKind::Insertion] {
        let input = vec![4, 8, 0, 8, -2, 6, 1];

        let mut seq_a = SequenceState::new(input.clone()).expect("non-empty list");
        let mut engine_a = kind.build(SortOrder::Descending);
        let ticks_a = run_to_completion(engine_a.as_mut(), &mut seq_a);

        let mut seq_b = SequenceState::new(input).expect("non-empty list");
        let mut engine_b = kind.build(SortOrder::Descending);
        let ticks_b = run_to_completion(engine_b.as_mut(), &mut seq_b);

        assert_eq!(ticks_a, ticks_b);
        assert_eq!(seq_a.snapshot(), seq_b.snapshot());
    }
}

#[test]
fn scenario_bubble_ascending_three_elements() {
    // [3,1,2] ascending bubble: [1,3,2] then [1,2,3], then done
    let mut seq = SequenceState::new(vec![3, 1, 2]).expect("non-empty list");
    let mut engine = AlgorithmKind::Bubble.build(SortOrder::Ascending);

    let step = engine.advance(&mut seq).expect("first tick");
    assert!(!step.done);
    assert_eq!(seq.snapshot(), &[1, 3, 2]);
    assert_eq!(step.highlighted.get(&0), Some(&HighlightRole::Compared));
    assert_eq!(step.highlighted.get(&1), Some(&HighlightRole::Placed));

    let step = engine.advance(&mut seq).expect("second tick");
    assert!(!step.done);
    assert_eq!(seq.snapshot(), &[1, 2, 3]);
    assert_eq!(step.highlighted.get(&1), Some(&HighlightRole::Compared));
    assert_eq!(step.highlighted.get(&2), Some(&HighlightRole::Placed));

    let step = engine.advance(&mut seq).expect("final tick");
    assert!(step.done);
    assert!(step.highlighted.is_empty());
}

#[test]
fn scenario_insertion_descending_already_ordered() {
    // [5,4,3,2,1] descending insertion: done immediately, zero mutations
    let mut seq = SequenceState::new(vec![5, 4, 3, 2, 1]).expect("non-empty list");
    let mut engine = AlgorithmKind::Insertion.build(SortOrder::Descending);

    let step = engine.advance(&mut seq).expect("first tick");
    assert!(step.done);
    assert!(step.highlighted.is_empty());
    assert_eq!(seq.snapshot(), &[5, 4, 3, 2, 1]);
}

#[test]
fn highlight_map_has_at_most_two_entries() {
    for kind in [AlgorithmKind::Bubble, AlgorithmKind::Insertion] {
        let mut seq = SequenceState::new(vec![6, 5, 4, 3, 2, 1]).expect("non-empty list");
        let mut engine = kind.build(SortOrder::Ascending);

        loop {
            let step = engine.advance(&mut seq).expect("advance during active run");
            if step.done {
                break;
            }
            assert!(!step.highlighted.is_empty());
            assert!(step.highlighted.len() <= 2);
        }
    }
}
