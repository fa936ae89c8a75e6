use approx::assert_abs_diff_eq;
use chart_gesture::GestureError;
use chart_gesture::core::{AffineTransform, Point};
use chart_gesture::interaction::{
    GesturePhase, GestureState, ZoomBehavior, ZoomCommitPolicy, ZoomDirection,
};

fn drag(state: &mut GestureState, from: (f64, f64), to: (f64, f64)) {
    state.begin_drag(from.into());
    state.update_drag(to.into()).expect("update while dragging");
    state.end_drag(to.into()).expect("end while dragging");
}

#[test]
fn new_state_is_idle_identity() {
    let state = GestureState::default();
    assert_eq!(state.phase(), GesturePhase::Idle);
    assert!(state.committed().is_identity());
    assert!(state.pending_scale().is_identity());
    assert!(state.pending_translate().is_identity());
    assert!(state.effective_transform().is_identity());
}

#[test]
fn drag_commits_exact_translation() {
    let mut state = GestureState::default();
    drag(&mut state, (50.0, 50.0), (70.0, 60.0));

    assert_eq!(state.phase(), GesturePhase::Idle);
    assert_eq!(state.committed().translate(), Point::new(20.0, 10.0));
    assert_abs_diff_eq!(state.committed().scale(), 1.0);
    assert!(state.pending_scale().is_identity());
    assert!(state.pending_translate().is_identity());
}

#[test]
fn update_drag_does_not_touch_committed() {
    let mut state = GestureState::default();
    state.begin_drag(Point::new(0.0, 0.0));
    let live = state.update_drag(Point::new(15.0, -5.0)).expect("update");

    assert!(state.committed().is_identity());
    assert_eq!(live.translate(), Point::new(15.0, -5.0));
    assert_eq!(state.pending_translate().translate(), Point::new(15.0, -5.0));
}

#[test]
fn second_drag_is_relative_to_its_own_anchor() {
    let mut state = GestureState::default();
    drag(&mut state, (50.0, 50.0), (70.0, 60.0));

    state.begin_drag(Point::new(70.0, 60.0));
    let live = state.update_drag(Point::new(90.0, 80.0)).expect("update");

    assert_eq!(live.translate(), Point::new(40.0, 30.0));
    assert_eq!(state.committed().translate(), Point::new(20.0, 10.0));
}

#[test]
fn update_and_end_require_dragging() {
    let mut state = GestureState::default();
    let err = state
        .update_drag(Point::new(1.0, 1.0))
        .expect_err("idle update must fail");
    assert!(matches!(
        err,
        GestureError::InvalidPhase {
            operation: "update_drag",
            phase: GesturePhase::Idle
        }
    ));
    assert!(state.end_drag(Point::new(1.0, 1.0)).is_err());
    assert!(state.committed().is_identity());
}

#[test]
fn begin_drag_while_dragging_restarts_pending_translation() {
    let mut state = GestureState::default();
    state.begin_drag(Point::new(0.0, 0.0));
    state.update_drag(Point::new(30.0, 30.0)).expect("update");

    state.begin_drag(Point::new(100.0, 100.0));
    assert_eq!(state.anchor(), Point::new(100.0, 100.0));
    assert!(state.pending_translate().is_identity());
    assert!(state.committed().is_identity());
}

#[test]
fn reset_from_any_state_returns_to_identity() {
    let mut state = GestureState::default();
    drag(&mut state, (0.0, 0.0), (12.0, 8.0));
    state
        .zoom(Point::new(5.0, 5.0), ZoomDirection::In)
        .expect("zoom");
    state.begin_drag(Point::new(1.0, 1.0));
    state.update_drag(Point::new(4.0, 9.0)).expect("update");

    let transform = state.reset();

    assert!(transform.is_identity());
    assert!(state.committed().is_identity());
    assert!(state.pending_scale().is_identity());
    assert!(state.pending_translate().is_identity());
    assert_eq!(state.phase(), GesturePhase::Idle);
}

#[test]
fn zoom_uses_documented_factors() {
    let pivot = Point::new(10.0, 20.0);
    let mut state = GestureState::default();

    let outcome = state.zoom(pivot, ZoomDirection::In).expect("zoom in");
    assert!(outcome.applied);
    assert_abs_diff_eq!(state.pending_scale().scale(), 1.1, epsilon = 1e-12);

    state.zoom(pivot, ZoomDirection::Out).expect("zoom out");
    // 1.1 and 0.9 are not exact inverses.
    assert_abs_diff_eq!(state.pending_scale().scale(), 0.99, epsilon = 1e-12);
    assert!(state.committed().is_identity());
}

#[test]
fn zoom_keeps_pivot_fixed_on_screen() {
    let pivot = Point::new(320.0, 240.0);
    let mut state = GestureState::default();
    state.zoom(pivot, ZoomDirection::In).expect("zoom");
    state.zoom(pivot, ZoomDirection::In).expect("zoom");

    let mapped = state.effective_transform().apply(pivot);
    assert_abs_diff_eq!(mapped.x, pivot.x, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped.y, pivot.y, epsilon = 1e-9);
}

#[test]
fn deferred_zoom_is_committed_by_next_drag_end() {
    let mut state = GestureState::default();
    state
        .zoom(Point::new(0.0, 0.0), ZoomDirection::In)
        .expect("zoom");
    assert!(state.committed().is_identity());

    drag(&mut state, (0.0, 0.0), (10.0, 0.0));

    assert!(state.pending_scale().is_identity());
    assert_abs_diff_eq!(state.committed().scale(), 1.1, epsilon = 1e-12);
    assert_abs_diff_eq!(state.committed().translate().x, 11.0, epsilon = 1e-9);
    assert_abs_diff_eq!(state.committed().translate().y, 0.0, epsilon = 1e-12);
}

#[test]
fn deferred_zoom_is_discarded_by_reset() {
    let mut state = GestureState::default();
    state
        .zoom(Point::new(3.0, 3.0), ZoomDirection::Out)
        .expect("zoom");
    state.reset();
    assert!(state.effective_transform().is_identity());
}

#[test]
fn immediate_zoom_folds_into_committed() {
    let mut state = GestureState::new(ZoomBehavior {
        commit: ZoomCommitPolicy::Immediate,
        ..ZoomBehavior::default()
    });
    drag(&mut state, (0.0, 0.0), (20.0, 10.0));

    let pivot = Point::new(100.0, 50.0);
    state.zoom(pivot, ZoomDirection::In).expect("zoom");

    assert!(state.pending_scale().is_identity());
    assert_abs_diff_eq!(state.committed().scale(), 1.1, epsilon = 1e-12);
    let before = AffineTransform::translation(Point::new(20.0, 10.0));
    let data_under_pivot = before.apply_inverse(pivot);
    let mapped = state.committed().apply(data_under_pivot);
    assert_abs_diff_eq!(mapped.x, pivot.x, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped.y, pivot.y, epsilon = 1e-9);
}

#[test]
fn zoom_ticks_outside_scale_bounds_are_dropped() {
    let mut state = GestureState::new(ZoomBehavior {
        min_scale: 0.85,
        ..ZoomBehavior::default()
    });
    let pivot = Point::new(0.0, 0.0);

    assert!(state.zoom(pivot, ZoomDirection::Out).expect("first").applied);
    let second = state.zoom(pivot, ZoomDirection::Out).expect("second");

    assert!(!second.applied);
    assert_abs_diff_eq!(state.pending_scale().scale(), 0.9, epsilon = 1e-12);
    assert_eq!(second.transform, state.effective_transform());
}

#[test]
fn long_zoom_out_sessions_never_collapse_scale() {
    let mut state = GestureState::default();
    for _ in 0..10_000 {
        state
            .zoom(Point::new(1.0, 1.0), ZoomDirection::Out)
            .expect("zoom");
    }
    let scale = state.effective_transform().scale();
    assert!(scale > 0.0);
    assert!(scale >= ZoomBehavior::default().min_scale);
}
