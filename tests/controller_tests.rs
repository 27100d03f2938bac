// Integration tests for the animation controller lifecycle

use sortty::controller::AnimationController;
use sortty::engine::{AlgorithmKind, EngineError, SortOrder};
use sortty::sequence::generate::ListGenerator;

/// Tick until the controller reports the run is over
fn run_to_completion(controller: &mut AnimationController) {
    while controller.is_running() {
        controller.tick().expect("tick during active run");
    }
}

#[test]
fn full_run_sorts_and_stops() {
    let mut controller = AnimationController::new(vec![4, 1, 3, 2]).expect("starting list");
    controller.start().expect("start on non-empty sequence");
    assert!(controller.is_running());

    run_to_completion(&mut controller);
    assert_eq!(controller.sequence().snapshot(), &[1, 2, 3, 4]);
    assert!(!controller.is_running());

    // After completion the controller is idle, not broken
    let extra = controller.tick().expect("tick while idle");
    assert!(extra.is_none());
}

#[test]
fn start_while_running_is_a_no_op() {
    let mut controller = AnimationController::new(vec![3, 2, 1]).expect("starting list");
    controller.start().expect("start");
    let before = controller.sequence().snapshot().to_vec();

    // A second start must not replace the live engine or touch the sequence
    controller.start().expect("redundant start");
    assert!(controller.is_running());
    assert_eq!(controller.sequence().snapshot(), before.as_slice());
}

#[test]
fn configuration_switches_are_ignored_mid_run() {
    let mut controller = AnimationController::new(vec![3, 2, 1]).expect("starting list");
    controller.set_order(SortOrder::Descending);
    controller.set_algorithm(AlgorithmKind::Insertion);
    controller.start().expect("start");

    controller.set_order(SortOrder::Ascending);
    controller.set_algorithm(AlgorithmKind::Bubble);
    assert_eq!(controller.order(), SortOrder::Descending);
    assert_eq!(controller.algorithm(), AlgorithmKind::Insertion);

    run_to_completion(&mut controller);
    assert_eq!(controller.sequence().snapshot(), &[3, 2, 1]);

    // Once idle, switches take effect again
    controller.set_order(SortOrder::Ascending);
    assert_eq!(controller.order(), SortOrder::Ascending);
}

#[test]
fn reset_mid_run_stops_and_replaces_the_list() {
    let mut controller = AnimationController::new(vec![5, 4, 3, 2, 1]).expect("starting list");
    controller.start().expect("start");
    controller.tick().expect("one tick");
    assert!(controller.is_running());

    controller.reset(vec![9, 8, 7]).expect("reset mid-run");
    assert!(!controller.is_running());
    assert_eq!(controller.sequence().snapshot(), &[9, 8, 7]);

    let next = controller.tick().expect("tick after reset");
    assert!(next.is_none());
}

#[test]
fn start_with_no_data_fails_empty_sequence() {
    let mut controller = AnimationController::default();
    assert!(matches!(
        controller.start(),
        Err(EngineError::EmptySequence)
    ));
    assert!(!controller.is_running());
    assert!(controller.sequence().is_empty());
}

#[test]
fn reset_with_empty_list_preserves_the_sequence() {
    let mut controller = AnimationController::new(vec![2, 1]).expect("starting list");
    let result = controller.reset(Vec::new());
    assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    assert_eq!(controller.sequence().snapshot(), &[2, 1]);
    assert!(!controller.is_running());
}

#[test]
fn constructing_with_an_empty_list_fails() {
    assert!(matches!(
        AnimationController::new(Vec::new()),
        Err(EngineError::InvalidInput { .. })
    ));
}

#[test]
fn generated_lists_drive_a_full_run() {
    let mut generator = ListGenerator::new(42);
    let values = generator.starting_list(40, 0, 100);
    let mut controller = AnimationController::new(values.clone()).expect("starting list");
    controller.set_algorithm(AlgorithmKind::Insertion);
    controller.start().expect("start");

    run_to_completion(&mut controller);

    let mut expected = values;
    expected.sort_unstable();
    assert_eq!(controller.sequence().snapshot(), expected.as_slice());
}

#[test]
fn done_tick_reports_done_and_clears_running() {
    let mut controller = AnimationController::new(vec![1, 2]).expect("starting list");
    controller.start().expect("start");

    // Already sorted: the first tick is the done tick
    let step = controller
        .tick()
        .expect("tick during active run")
        .expect("run was active");
    assert!(step.done);
    assert!(!controller.is_running());
}
