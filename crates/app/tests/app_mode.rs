use std::time::Duration;

use macroquad::prelude::KeyCode;
use maze_app::app_loop::{AppState, FieldFocus, FrameInput, Notice};
use maze_core::{MazeController, MazeSettings};

fn fresh(seed: u64) -> (MazeController, AppState) {
    let mut controller = MazeController::new(&MazeSettings::default(), seed);
    let app = AppState::new(&mut controller);
    (controller, app)
}

fn press(keys: &[KeyCode]) -> FrameInput {
    FrameInput { keys_pressed: keys.to_vec(), ..FrameInput::default() }
}

fn wait(ms: u64) -> FrameInput {
    FrameInput { elapsed: Duration::from_millis(ms), ..FrameInput::default() }
}

fn typing(chars: &str) -> FrameInput {
    FrameInput { typed: chars.chars().collect(), ..FrameInput::default() }
}

#[test]
fn space_starts_animation_at_the_entry() {
    let (mut controller, mut app) = fresh(7);
    app.tick(&mut controller, &press(&[KeyCode::Space]));

    assert!(controller.is_animating());
    assert_eq!(controller.player(), Some(controller.dims().entry()));
    assert_eq!(controller.active_timer_count(), 1);
}

#[test]
fn animation_runs_to_completion_notice() {
    let (mut controller, mut app) = fresh(11);
    app.tick(&mut controller, &press(&[KeyCode::Space]));
    let steps = controller.solution().map(|path| path.len()).expect("solved");

    for _ in 0..=steps {
        assert_eq!(app.notice, None);
        app.tick(&mut controller, &wait(100));
    }

    assert_eq!(app.notice, Some(Notice::MazeComplete));
    assert_eq!(controller.player(), Some(controller.dims().exit()));
    assert_eq!(controller.active_timer_count(), 0);
}

#[test]
fn typed_size_commits_on_enter() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &press(&[KeyCode::Backspace]));
    app.tick(&mut controller, &press(&[KeyCode::Backspace]));
    app.tick(&mut controller, &typing("25"));
    assert_eq!(app.size_field.text(), "25");
    assert_eq!(controller.size(), 10);

    app.tick(&mut controller, &press(&[KeyCode::Enter]));
    assert_eq!(controller.size(), 25);
    assert_eq!(controller.dims().rows, 25);
    assert_eq!(app.size_field.text(), "25");
}

#[test]
fn typing_on_the_first_frame_is_kept() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &typing("25"));
    assert_eq!(app.size_field.text(), "25");
}

#[test]
fn new_digits_replace_a_committed_size() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &typing("12"));
    app.tick(&mut controller, &press(&[KeyCode::Enter]));
    assert_eq!(controller.size(), 12);

    app.tick(&mut controller, &typing("7"));
    assert_eq!(app.size_field.text(), "7");
    app.tick(&mut controller, &press(&[KeyCode::KpEnter]));
    assert_eq!(controller.size(), 7);
}

#[test]
fn out_of_range_size_restores_field_and_keeps_maze() {
    let (mut controller, mut app) = fresh(3);
    let before = controller.grid().clone();
    app.tick(&mut controller, &typing("51"));

    app.tick(&mut controller, &press(&[KeyCode::Enter]));

    assert_eq!(app.size_field.text(), "10");
    assert_eq!(app.notice, Some(Notice::SizeRejected));
    assert_eq!(controller.grid(), &before);
}

#[test]
fn size_field_ignores_letters_and_caps_length() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &typing("4x000"));
    assert_eq!(app.size_field.text(), "400");

    app.tick(&mut controller, &press(&[KeyCode::Enter]));
    assert_eq!(app.size_field.text(), "10");
    assert_eq!(app.notice, Some(Notice::SizeRejected));
}

#[test]
fn typed_speed_commits_after_tab() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &press(&[KeyCode::Tab]));
    assert_eq!(app.focus, FieldFocus::Speed);

    app.tick(&mut controller, &typing("250"));
    assert_eq!(app.size_field.text(), "10");
    app.tick(&mut controller, &press(&[KeyCode::Enter]));
    assert_eq!(controller.step_interval(), Duration::from_millis(250));
    assert_eq!(app.speed_field.text(), "250");
    assert_eq!(controller.size(), 10);
}

#[test]
fn out_of_range_speed_is_rejected_and_reverted() {
    let (mut controller, mut app) = fresh(3);
    app.tick(&mut controller, &press(&[KeyCode::Tab]));
    app.tick(&mut controller, &typing("9999"));

    app.tick(&mut controller, &press(&[KeyCode::Enter]));

    assert!(matches!(app.notice, Some(Notice::SpeedRejected(_))));
    assert_eq!(app.speed_field.text(), "100");
    assert_eq!(controller.step_interval(), Duration::from_millis(100));

    app.tick(&mut controller, &press(&[KeyCode::Tab]));
    assert_eq!(app.focus, FieldFocus::Size);
}

#[test]
fn s_highlights_the_solution() {
    let (mut controller, mut app) = fresh(5);
    app.tick(&mut controller, &press(&[KeyCode::S]));

    assert!(controller.is_solution_highlighted());
    assert!(!controller.is_animating());
    let on_path = controller.cell_views().iter().filter(|view| view.markers.on_path).count();
    assert_eq!(Some(on_path), controller.solution().map(|path| path.len()));
}

#[test]
fn r_regenerates_and_cancels_animation() {
    let (mut controller, mut app) = fresh(5);
    app.tick(&mut controller, &press(&[KeyCode::Space]));
    app.tick(&mut controller, &wait(250));
    let generation = controller.generation();

    app.tick(&mut controller, &press(&[KeyCode::R]));

    assert_eq!(controller.generation(), generation + 1);
    assert!(!controller.is_animating());
    assert_eq!(controller.active_timer_count(), 0);
    assert_eq!(controller.player(), None);
}

#[test]
fn arrow_keys_adjust_speed_within_range() {
    let (mut controller, mut app) = fresh(5);
    app.tick(&mut controller, &press(&[KeyCode::Up]));
    assert_eq!(controller.step_interval(), Duration::from_millis(110));
    assert_eq!(app.speed_field.text(), "110");
    app.tick(&mut controller, &press(&[KeyCode::Down]));
    app.tick(&mut controller, &press(&[KeyCode::Down]));
    assert_eq!(controller.step_interval(), Duration::from_millis(90));

    controller.set_step_interval(Duration::from_millis(5)).expect("in range");
    app.tick(&mut controller, &press(&[KeyCode::Down]));
    assert!(matches!(app.notice, Some(Notice::SpeedRejected(_))));
    assert_eq!(controller.step_interval(), Duration::from_millis(5));
}
