//! Per-cell view model shared by the window renderer and the text renderer.

use crate::grid::Grid;
use crate::path::MazePath;
use crate::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellMarkers {
    pub start: bool,
    pub end: bool,
    pub player: bool,
    pub on_path: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub pos: Pos,
    pub walls: [bool; 4],
    pub markers: CellMarkers,
}

impl CellView {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    /// Single-character glyph: player, then start/end, then path.
    pub fn glyph(&self) -> char {
        let markers = self.markers;
        if markers.player {
            '@'
        } else if markers.start {
            'S'
        } else if markers.end {
            'E'
        } else if markers.on_path {
            '.'
        } else {
            ' '
        }
    }
}

/// Row-major views (`index = y * cols + x`) carrying walls plus start, end, player, and
/// path markers.
pub fn cell_views(
    grid: &Grid,
    player: Option<Pos>,
    highlighted_path: Option<&MazePath>,
) -> Vec<CellView> {
    if grid.is_empty() {
        return Vec::new();
    }
    let dims = grid.dims();
    let mut on_path = vec![false; dims.cell_count()];
    for pos in highlighted_path.map(MazePath::steps).unwrap_or_default() {
        if let Some(index) = dims.index_of(*pos) {
            on_path[index] = true;
        }
    }

    grid.cells()
        .iter()
        .zip(on_path)
        .map(|(cell, on_path)| CellView {
            pos: cell.pos,
            walls: cell.walls,
            markers: CellMarkers {
                start: cell.pos == dims.entry(),
                end: cell.pos == dims.exit(),
                player: player == Some(cell.pos),
                on_path,
            },
        })
        .collect()
}

/// Box-drawing text rendering, three columns per cell.
pub fn render_ascii(grid: &Grid, views: &[CellView]) -> String {
    let dims = grid.dims();
    if grid.is_empty() || views.len() != dims.cell_count() {
        return String::new();
    }

    let mut out = String::new();
    for row in views.chunks(dims.cols) {
        out.push_str(&horizontal_edge(row, Direction::Up));
        out.push('\n');
        out.push(if row[0].has_wall(Direction::Left) { '|' } else { ' ' });
        for view in row {
            out.push(' ');
            out.push(view.glyph());
            out.push(' ');
            out.push(if view.has_wall(Direction::Right) { '|' } else { ' ' });
        }
        out.push('\n');
    }
    if let Some(last_row) = views.chunks(dims.cols).last() {
        out.push_str(&horizontal_edge(last_row, Direction::Down));
        out.push('\n');
    }
    out
}

fn horizontal_edge(row: &[CellView], side: Direction) -> String {
    let mut line = String::from("+");
    for view in row {
        line.push_str(if view.has_wall(side) { "---" } else { "   " });
        line.push('+');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    fn corridor() -> Grid {
        let mut grid = Grid::walled(Dimensions::new(1, 3));
        grid.carve(Pos::new(0, 0), Direction::Right);
        grid.carve(Pos::new(1, 0), Direction::Right);
        grid
    }

    #[test]
    fn views_mark_corners_player_and_path() {
        let grid = corridor();
        let path = MazePath::new(vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        let views = cell_views(&grid, Some(Pos::new(1, 0)), Some(&path));

        assert_eq!(views.len(), 3);
        assert!(views[0].markers.start && !views[0].markers.end);
        assert!(views[1].markers.player && views[1].markers.on_path);
        assert!(views[2].markers.end && views[2].markers.on_path);
    }

    #[test]
    fn player_glyph_wins_over_start_marker() {
        let grid = corridor();
        let views = cell_views(&grid, Some(Pos::new(0, 0)), None);
        assert_eq!(views[0].glyph(), '@');
        assert_eq!(views[1].glyph(), ' ');
        assert_eq!(views[2].glyph(), 'E');
    }

    #[test]
    fn renders_corridor_as_boxed_text() {
        let grid = corridor();
        let path = MazePath::new(vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        let views = cell_views(&grid, None, Some(&path));
        let expected = "+---+---+---+\n| S   .   E |\n+---+---+---+\n";
        assert_eq!(render_ascii(&grid, &views), expected);
    }

    #[test]
    fn renders_vertical_passages_as_gaps() {
        let mut grid = Grid::walled(Dimensions::new(2, 1));
        grid.carve(Pos::new(0, 0), Direction::Down);
        let views = cell_views(&grid, None, None);
        let expected = "+---+\n| S |\n+   +\n| E |\n+---+\n";
        assert_eq!(render_ascii(&grid, &views), expected);
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = Grid::walled(Dimensions::new(0, 3));
        assert!(cell_views(&grid, None, None).is_empty());
        assert_eq!(render_ascii(&grid, &[]), "");
    }
}
