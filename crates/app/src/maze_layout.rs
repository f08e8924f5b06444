//! Flexbox layout for the maze window: a status strip over a row holding the maze
//! panel and a fixed-width controls panel.

use taffy::prelude::*;
use taffy::{Layout, LengthPercentageAuto, Rect, TaffyResult, TaffyTree};

pub const WINDOW_PADDING: f32 = 20.0;
pub const STATUS_HEIGHT: f32 = 40.0;
pub const STATUS_GAP: f32 = 15.0;
pub const CONTROLS_WIDTH: f32 = 260.0;
pub const CONTROLS_GAP: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub status: PanelRect,
    pub maze: PanelRect,
    pub controls: PanelRect,
}

/// The panel tree, built once and recomputed for each viewport size.
pub struct MazeLayout {
    tree: TaffyTree<()>,
    window: NodeId,
    status: NodeId,
    body: NodeId,
    maze: NodeId,
    controls: NodeId,
}

fn edges(left: f32, right: f32, top: f32, bottom: f32) -> Rect<LengthPercentageAuto> {
    Rect { left: length(left), right: length(right), top: length(top), bottom: length(bottom) }
}

impl MazeLayout {
    pub fn new() -> TaffyResult<Self> {
        let mut tree = TaffyTree::new();

        let status = tree.new_leaf(Style {
            size: Size { width: percent(1.0), height: length(STATUS_HEIGHT) },
            margin: edges(0.0, 0.0, 0.0, STATUS_GAP),
            ..Style::default()
        })?;
        let maze = tree.new_leaf(Style { flex_grow: 1.0, ..Style::default() })?;
        let controls = tree.new_leaf(Style {
            size: Size { width: length(CONTROLS_WIDTH), height: percent(1.0) },
            flex_shrink: 0.0,
            margin: edges(CONTROLS_GAP, 0.0, 0.0, 0.0),
            ..Style::default()
        })?;
        let body = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                size: Size { width: percent(1.0), height: auto() },
                ..Style::default()
            },
            &[maze, controls],
        )?;
        let window = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: Rect {
                    left: length(WINDOW_PADDING),
                    right: length(WINDOW_PADDING),
                    top: length(WINDOW_PADDING),
                    bottom: length(WINDOW_PADDING),
                },
                ..Style::default()
            },
            &[status, body],
        )?;

        Ok(Self { tree, window, status, body, maze, controls })
    }

    /// Panel rectangles in window coordinates for a `width` x `height` viewport.
    pub fn compute(&mut self, width: f32, height: f32) -> TaffyResult<FrameLayout> {
        let viewport = Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        };
        self.tree.compute_layout(self.window, viewport)?;

        let window = self.tree.layout(self.window)?;
        let body = self.tree.layout(self.body)?;
        Ok(FrameLayout {
            status: to_window_rect(self.tree.layout(self.status)?, &[window]),
            maze: to_window_rect(self.tree.layout(self.maze)?, &[window, body]),
            controls: to_window_rect(self.tree.layout(self.controls)?, &[window, body]),
        })
    }
}

/// Taffy locations are parent-relative; `ancestors` lists every enclosing node.
fn to_window_rect(node: &Layout, ancestors: &[&Layout]) -> PanelRect {
    let (x, y) = ancestors.iter().fold((node.location.x, node.location.y), |(x, y), parent| {
        (x + parent.location.x, y + parent.location.y)
    });
    PanelRect { x, y, width: node.size.width, height: node.size.height }
}
