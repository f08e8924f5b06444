//! Rendering for the maze frame: status line, maze grid, and controls panel.

use crate::maze_layout::{FrameLayout, PanelRect};
use crate::ui_text::{control_lines, status_text};
use macroquad::prelude::*;
use maze_app::app_loop::AppState;
use maze_core::{CellMarkers, CellView, Direction, MazeController};

const BORDER_COLOR: Color = Color { r: 0.75, g: 0.75, b: 0.75, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const WALL_COLOR: Color = BLACK;
const WALL_THICKNESS: f32 = 2.0;
const START_COLOR: Color = Color { r: 0.55, g: 0.85, b: 0.55, a: 1.0 };
const END_COLOR: Color = Color { r: 0.95, g: 0.55, b: 0.55, a: 1.0 };
const PLAYER_COLOR: Color = Color { r: 0.2, g: 0.45, b: 0.95, a: 1.0 };
const PATH_COLOR: Color = Color { r: 1.0, g: 0.9, b: 0.45, a: 1.0 };
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 22.0;

pub fn draw_frame(controller: &MazeController, app: &AppState, layout: &FrameLayout, cell_px: f32) {
    draw_panel_borders(layout);
    draw_status_panel(controller, app, layout.status);
    draw_maze(controller, layout.maze, cell_px);
    draw_controls_panel(controller, app, layout.controls);
}

fn draw_panel_borders(layout: &FrameLayout) {
    for panel in [layout.status, layout.controls] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            BORDER_THICKNESS,
            BORDER_COLOR,
        );
    }
}

fn draw_status_panel(controller: &MazeController, app: &AppState, panel: PanelRect) {
    let color = if app.notice.is_some() { RED } else { DARKGRAY };
    draw_text(
        &status_text(controller, app),
        panel.x + PANEL_PAD_X,
        panel.y + PANEL_PAD_Y,
        22.0,
        color,
    );
}

fn draw_controls_panel(controller: &MazeController, app: &AppState, panel: PanelRect) {
    let text_x = panel.x + PANEL_PAD_X;
    let mut text_y = panel.y + PANEL_PAD_Y;
    for line in control_lines(controller, app) {
        draw_text(&line, text_x, text_y, 20.0, DARKGRAY);
        text_y += LINE_HEIGHT;
    }
}

fn draw_maze(controller: &MazeController, panel: PanelRect, requested_cell_px: f32) {
    let dims = controller.dims();
    let cell_px = fit_cell_px(requested_cell_px, panel, dims.rows, dims.cols);

    for view in controller.cell_views() {
        let (x, y) = cell_origin(panel, &view, cell_px);
        if let Some(color) = cell_fill(view.markers) {
            draw_rectangle(x, y, cell_px, cell_px, color);
        }
        for [x1, y1, x2, y2] in wall_segments(&view, x, y, cell_px) {
            draw_line(x1, y1, x2, y2, WALL_THICKNESS, WALL_COLOR);
        }
    }
}

/// Shrinks the configured cell size only when the maze would overflow its panel.
fn fit_cell_px(requested: f32, panel: PanelRect, rows: usize, cols: usize) -> f32 {
    if rows == 0 || cols == 0 {
        return requested;
    }
    let fit_width = (panel.width - WALL_THICKNESS) / cols as f32;
    let fit_height = (panel.height - WALL_THICKNESS) / rows as f32;
    requested.min(fit_width).min(fit_height).floor().max(1.0)
}

fn cell_origin(panel: PanelRect, view: &CellView, cell_px: f32) -> (f32, f32) {
    let inset = WALL_THICKNESS / 2.0;
    (
        panel.x + inset + view.pos.x as f32 * cell_px,
        panel.y + inset + view.pos.y as f32 * cell_px,
    )
}

/// Player beats the corner markers, which beat the path highlight.
fn cell_fill(markers: CellMarkers) -> Option<Color> {
    if markers.player {
        Some(PLAYER_COLOR)
    } else if markers.start {
        Some(START_COLOR)
    } else if markers.end {
        Some(END_COLOR)
    } else if markers.on_path {
        Some(PATH_COLOR)
    } else {
        None
    }
}

/// Line segments `[x1, y1, x2, y2]` for each wall present on the cell.
fn wall_segments(view: &CellView, x: f32, y: f32, cell_px: f32) -> Vec<[f32; 4]> {
    let (right, bottom) = (x + cell_px, y + cell_px);
    Direction::ALL
        .into_iter()
        .filter(|direction| view.has_wall(*direction))
        .map(|direction| match direction {
            Direction::Up => [x, y, right, y],
            Direction::Right => [right, y, right, bottom],
            Direction::Down => [x, bottom, right, bottom],
            Direction::Left => [x, y, x, bottom],
        })
        .collect()
}
