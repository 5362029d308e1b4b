use super::{click, send, set_mode, setup};
use approx::assert_abs_diff_eq;
use trail_route_editor::{AppCommand, AppIntent, Difficulty, DrawMode, RoutePoint, TechnicalTier};

#[test]
fn test_end_to_end_manual_route_is_easy() {
    let (mut controller, mut state) = setup();

    for (i, elevation) in [800.0, 820.0, 780.0].into_iter().enumerate() {
        click(
            &mut controller,
            &mut state,
            RoutePoint::with_elevation(0.0, i as f64 * 3.0, elevation),
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::TechnicalTierChanged {
            tier: TechnicalTier::S2,
        },
    );

    let summary = controller.build_summary(&state);
    assert_abs_diff_eq!(summary.distance, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(summary.elevation_gain, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(summary.difficulty_score.unwrap(), 20.0, epsilon = 1e-12);
    assert_eq!(summary.difficulty, Difficulty::Easy);
}

#[test]
fn test_snap_mode_adds_points_like_manual() {
    let (mut controller, mut state) = setup();
    set_mode(&mut controller, &mut state, DrawMode::Snap);

    let point = RoutePoint::with_elevation(10.0, 20.0, 5.0);
    click(&mut controller, &mut state, point);

    assert_eq!(state.points(), &[point]);
    assert_eq!(state.draw.mode(), DrawMode::Snap);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::AddPoint { point })
    );
}

#[test]
fn test_undo_redo_inverse_law() {
    let (mut controller, mut state) = setup();
    for i in 0..4 {
        click(
            &mut controller,
            &mut state,
            RoutePoint::with_elevation(i as f64, 0.0, 100.0 + i as f64),
        );
    }
    let before_last = state.points()[..3].to_vec();
    let after_last = state.points().to_vec();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.points(), before_last.as_slice());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.points(), after_last.as_slice());
}

#[test]
fn test_new_edit_after_undo_invalidates_redo() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, RoutePoint::new(0.0, 0.0));
    click(&mut controller, &mut state, RoutePoint::new(1.0, 1.0));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    click(&mut controller, &mut state, RoutePoint::new(9.0, 9.0));
    assert!(!state.can_redo());

    let before = state.points().to_vec();
    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.points(), before.as_slice());
}

#[test]
fn test_undo_redo_on_empty_history_are_no_ops() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert!(state.points().is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.command_log.len(), 2);
}

#[test]
fn test_remove_last_point_and_clear() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, RoutePoint::new(0.0, 0.0));
    click(&mut controller, &mut state, RoutePoint::new(1.0, 0.0));

    send(&mut controller, &mut state, AppIntent::RemoveLastPointRequested);
    assert_eq!(state.point_count(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.point_count(), 2);

    send(&mut controller, &mut state, AppIntent::ClearRouteRequested);
    assert!(state.points().is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_raising_technical_tier_never_lowers_difficulty() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, RoutePoint::with_elevation(0.0, 0.0, 100.0));
    click(&mut controller, &mut state, RoutePoint::with_elevation(0.0, 1.0, 140.0));

    let mut previous = Difficulty::Easy;
    for tier in TechnicalTier::ALL {
        send(&mut controller, &mut state, AppIntent::TechnicalTierChanged { tier });
        let current = controller.build_summary(&state).difficulty;
        assert!(current >= previous, "{tier}: {current:?} < {previous:?}");
        previous = current;
    }
    // 40 / 0.5 = 80 → S5: 120 → hard
    assert_eq!(previous, Difficulty::Hard);
}
