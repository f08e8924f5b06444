//! Window configuration, sized so the configured maze fits at its configured cell size.

use macroquad::window::Conf;
use maze_app::APP_NAME;
use maze_core::{MAX_MAZE_SIZE, MazeSettings};

use crate::maze_layout::{CONTROLS_GAP, CONTROLS_WIDTH, STATUS_GAP, STATUS_HEIGHT, WINDOW_PADDING};

const MIN_WINDOW_WIDTH: i32 = 800;
const MIN_WINDOW_HEIGHT: i32 = 600;
const MAX_WINDOW_SIDE: i32 = 1400;

/// Room for a maze of `size` cells per side plus the status and controls panels.
fn window_size(size: usize, cell_px: f32) -> (i32, i32) {
    let maze_px = size.min(MAX_MAZE_SIZE) as f32 * cell_px;
    let width = 2.0 * WINDOW_PADDING + maze_px + CONTROLS_GAP + CONTROLS_WIDTH;
    let height = 2.0 * WINDOW_PADDING + STATUS_HEIGHT + STATUS_GAP + maze_px;
    (
        (width.ceil() as i32).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_SIDE),
        (height.ceil() as i32).clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_SIDE),
    )
}

pub fn build_window_conf(settings: &MazeSettings) -> Conf {
    let (window_width, window_height) = window_size(settings.size, settings.cell_px);
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width,
        window_height,
        // Request a high-DPI framebuffer so wall lines stay crisp on scaled displays.
        high_dpi: true,
        ..Default::default()
    }
}
