//! Text for the status line and the controls panel.

use maze_app::app_loop::{AppState, FieldFocus};
use maze_app::format_seed;
use maze_core::{
    AnimationState, MAX_MAZE_SIZE, MAX_STEP_INTERVAL_MS, MIN_MAZE_SIZE, MIN_STEP_INTERVAL_MS,
    MazeController, format_fingerprint,
};

pub fn status_text(controller: &MazeController, app: &AppState) -> String {
    if let Some(notice) = &app.notice {
        return notice.message();
    }
    match controller.animation() {
        AnimationState::Animating { path, next_step, .. } => {
            format!("Walking the maze: step {next_step} of {}", path.len())
        }
        AnimationState::Idle if controller.is_solution_highlighted() => {
            "Solution shown (Space to walk it)".to_string()
        }
        AnimationState::Idle => "Ready (Space to start, S to show the solution)".to_string(),
    }
}

pub fn control_lines(controller: &MazeController, app: &AppState) -> Vec<String> {
    let path_len = controller
        .solution()
        .map(|path| path.len().to_string())
        .unwrap_or_else(|| "-".to_string());
    let cursor = |field: FieldFocus| if app.focus == field { "_" } else { "" };
    vec![
        format!("Size: {}{}", app.size_field.text(), cursor(FieldFocus::Size)),
        format!("  digits + Enter ({MIN_MAZE_SIZE}-{MAX_MAZE_SIZE})"),
        format!("Speed: {}{} ms/step", app.speed_field.text(), cursor(FieldFocus::Speed)),
        format!("  digits + Enter or Up/Down ({MIN_STEP_INTERVAL_MS}-{MAX_STEP_INTERVAL_MS})"),
        "[Tab] Switch field".to_string(),
        String::new(),
        "[Space] Start".to_string(),
        "[S] Show solution".to_string(),
        "[R] Regenerate".to_string(),
        String::new(),
        format!("Seed: {}", format_seed(controller.run_seed())),
        format!("Maze: {}", format_fingerprint(controller.grid().fingerprint())),
        format!("Generation: {}", controller.generation()),
        format!("Path length: {path_len}"),
    ]
}
