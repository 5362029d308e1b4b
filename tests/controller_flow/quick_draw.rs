use super::{click, send, set_mode, setup};
use trail_route_editor::{
    AppCommand, AppController, AppIntent, DrawMode, DrawState, EngineOptions,
    QuickDrawSynthesizer, RouteDraft, RoutePoint,
};

fn start() -> RoutePoint {
    RoutePoint::with_elevation(-23.55, -46.63, 760.0)
}

fn end() -> RoutePoint {
    RoutePoint::with_elevation(-23.50, -46.60, 820.0)
}

#[test]
fn test_quick_draw_two_clicks_generate_route_and_return_to_manual() {
    let (mut controller, mut state) = setup();
    set_mode(&mut controller, &mut state, DrawMode::Quick);

    click(&mut controller, &mut state, start());
    assert!(state.points().is_empty());
    assert_eq!(state.draw.pending(), Some(&start()));
    assert_eq!(state.draw.mode(), DrawMode::Quick);

    click(&mut controller, &mut state, end());
    let synth = QuickDrawSynthesizer::new();
    assert_eq!(state.point_count(), synth.intermediate_points + 2);
    assert_eq!(state.points().first(), Some(&start()));
    assert_eq!(state.points().last(), Some(&end()));
    assert_eq!(state.draw, DrawState::Manual);
    assert!(state.draw.pending().is_none());

    // Der nächste Klick landet wieder als normaler Punkt
    let extra = RoutePoint::with_elevation(-23.49, -46.59, 810.0);
    click(&mut controller, &mut state, extra);
    assert_eq!(state.points().last(), Some(&extra));
}

#[test]
fn test_quick_draw_is_undone_in_one_step() {
    let (mut controller, mut state) = setup();
    click(&mut controller, &mut state, RoutePoint::new(0.0, 0.0));
    let before = state.points().to_vec();

    set_mode(&mut controller, &mut state, DrawMode::Quick);
    click(&mut controller, &mut state, start());
    click(&mut controller, &mut state, end());
    let generated = state.points().to_vec();
    assert_eq!(generated.len(), 8);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.points(), before.as_slice());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.points(), generated.as_slice());
}

#[test]
fn test_mode_switch_mid_quick_draw_discards_pending_start() {
    let (mut controller, mut state) = setup();
    set_mode(&mut controller, &mut state, DrawMode::Quick);
    click(&mut controller, &mut state, start());
    assert!(state.draw.pending().is_some());

    set_mode(&mut controller, &mut state, DrawMode::Manual);
    assert!(state.draw.pending().is_none());
    assert!(state.points().is_empty());
    assert!(!state.can_undo());

    // Erneut Quick: beginnt wieder beim Startpunkt
    set_mode(&mut controller, &mut state, DrawMode::Quick);
    assert_eq!(state.draw, DrawState::QuickAwaitingStart);
}

#[test]
fn test_quick_draw_cancel_keeps_quick_mode() {
    let (mut controller, mut state) = setup();
    set_mode(&mut controller, &mut state, DrawMode::Quick);
    click(&mut controller, &mut state, start());

    send(&mut controller, &mut state, AppIntent::QuickDrawCancelled);
    assert_eq!(state.draw, DrawState::QuickAwaitingStart);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::CancelQuickDraw)
    );

    // Ohne wartenden Start wird nichts geloggt
    let logged = state.command_log.len();
    send(&mut controller, &mut state, AppIntent::QuickDrawCancelled);
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_same_seed_reproduces_quick_draw() {
    let run = |seed: u64| {
        let mut controller = AppController::with_seed(seed);
        let mut state = trail_route_editor::RouteDraft::new();
        set_mode(&mut controller, &mut state, DrawMode::Quick);
        click(&mut controller, &mut state, start());
        click(&mut controller, &mut state, end());
        state.points().to_vec()
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_quick_draw_route_has_positive_elevation_gain() {
    let (mut controller, mut state) = setup();
    set_mode(&mut controller, &mut state, DrawMode::Quick);
    click(&mut controller, &mut state, start());
    click(&mut controller, &mut state, end());

    let summary = controller.build_summary(&state);
    assert_eq!(summary.distance, 3.5);
    // Hügel über dem linearen Profil: mindestens der Netto-Anstieg
    assert!(summary.elevation_gain > 60.0);
    assert!(summary.can_undo);
}

#[test]
fn test_quick_draw_with_invalid_options_from_toml() {
    let options = EngineOptions::from_toml_str(
        "quick_draw_jitter = inf\nquick_draw_points = 9223372036854775807\n",
    )
    .expect("gültiges TOML");
    let mut controller = AppController::with_seed(7);
    let mut state = RouteDraft::with_options(options);

    set_mode(&mut controller, &mut state, DrawMode::Quick);
    click(&mut controller, &mut state, start());
    click(&mut controller, &mut state, end());

    assert_eq!(state.point_count(), QuickDrawSynthesizer::new().intermediate_points + 2);
    assert!(state
        .points()
        .iter()
        .all(|p| p.latitude.is_finite() && p.longitude.is_finite()));
    assert_eq!(state.draw, DrawState::Manual);
}
