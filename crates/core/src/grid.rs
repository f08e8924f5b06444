//! Cell and grid model shared by generation, solving, and rendering.

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, Direction, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Pos,
    /// Wall flags indexed by [`Direction::wall_index`]: up, right, down, left.
    pub walls: [bool; 4],
    pub visited: bool,
}

impl Cell {
    fn walled(pos: Pos) -> Self {
        Self { pos, walls: [true; 4], visited: false }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    pub fn open_sides(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|direction| !self.has_wall(*direction))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid where every cell keeps all four walls and is unvisited.
    pub fn walled(dims: Dimensions) -> Self {
        let cells = (0..dims.cell_count()).map(|index| Cell::walled(dims.pos_at(index))).collect();
        Self { dims, cells }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.dims.contains(pos)
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.dims.index_of(pos).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.dims.index_of(pos).map(|index| &mut self.cells[index])
    }

    /// Wall state on `pos` facing `direction`. Positions outside the grid count as walled.
    pub fn has_wall(&self, pos: Pos, direction: Direction) -> bool {
        self.cell(pos).is_none_or(|cell| cell.has_wall(direction))
    }

    pub fn neighbor(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        let next = pos.step(direction);
        (self.in_bounds(pos) && self.in_bounds(next)).then_some(next)
    }

    /// The neighbor in `direction` when no wall separates it from `pos`.
    pub fn passage(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        if self.has_wall(pos, direction) {
            return None;
        }
        self.neighbor(pos, direction)
    }

    /// Removes the wall between `pos` and its neighbor in `direction` on both sides.
    /// Returns the neighbor, or `None` (leaving the grid untouched) at the border.
    pub fn carve(&mut self, pos: Pos, direction: Direction) -> Option<Pos> {
        let next = self.neighbor(pos, direction)?;
        if let Some(cell) = self.cell_mut(pos) {
            cell.walls[direction.wall_index()] = false;
        }
        if let Some(cell) = self.cell_mut(next) {
            cell.walls[direction.opposite().wall_index()] = false;
        }
        Some(next)
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visited)
    }

    pub(crate) fn mark_visited(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = true;
        }
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }

    /// Number of carved passages between in-bounds neighbors, each counted once.
    pub fn carved_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|direction| self.passage(cell.pos, *direction).is_some())
                    .count()
            })
            .sum()
    }

    /// Every `(pos, direction)` whose wall state disagrees with the neighbor's opposite
    /// wall. Empty for any grid built through [`Grid::carve`].
    pub fn asymmetric_walls(&self) -> Vec<(Pos, Direction)> {
        let mut mismatches = Vec::new();
        for cell in &self.cells {
            for direction in Direction::ALL {
                let Some(next) = self.neighbor(cell.pos, direction) else {
                    continue;
                };
                if cell.has_wall(direction) != self.has_wall(next, direction.opposite()) {
                    mismatches.push((cell.pos, direction));
                }
            }
        }
        mismatches
    }

    /// Border walls that were opened. Carving never opens them.
    pub fn open_border_sides(&self) -> Vec<(Pos, Direction)> {
        let mut open = Vec::new();
        for cell in &self.cells {
            for direction in cell.open_sides() {
                if self.neighbor(cell.pos, direction).is_none() {
                    open.push((cell.pos, direction));
                }
            }
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_grid_has_every_wall_and_no_visits() {
        let grid = Grid::walled(Dimensions::new(2, 3));
        assert_eq!(grid.cells().len(), 6);
        assert!(grid.cells().iter().all(|cell| cell.walls == [true; 4] && !cell.visited));
        assert_eq!(grid.carved_edge_count(), 0);
        assert_eq!(grid.cell(Pos::new(2, 1)).map(|cell| cell.pos), Some(Pos::new(2, 1)));
    }

    #[test]
    fn carve_opens_both_sides() {
        let mut grid = Grid::walled(Dimensions::square(3));
        let from = Pos::new(1, 1);

        assert_eq!(grid.carve(from, Direction::Left), Some(Pos::new(0, 1)));
        assert!(!grid.has_wall(from, Direction::Left));
        assert!(!grid.has_wall(Pos::new(0, 1), Direction::Right));
        assert!(grid.asymmetric_walls().is_empty());
        assert_eq!(grid.carved_edge_count(), 1);
    }

    #[test]
    fn carve_refuses_border_walls() {
        let mut grid = Grid::walled(Dimensions::square(2));
        assert_eq!(grid.carve(Pos::new(0, 0), Direction::Up), None);
        assert!(grid.has_wall(Pos::new(0, 0), Direction::Up));
        assert!(grid.open_border_sides().is_empty());
    }

    #[test]
    fn passage_requires_open_wall_and_bounds() {
        let mut grid = Grid::walled(Dimensions::square(2));
        let origin = Pos::new(0, 0);
        assert_eq!(grid.passage(origin, Direction::Down), None);
        grid.carve(origin, Direction::Down);
        assert_eq!(grid.passage(origin, Direction::Down), Some(Pos::new(0, 1)));
        assert_eq!(grid.passage(Pos::new(5, 5), Direction::Down), None);
    }

    #[test]
    fn outside_positions_read_as_walled() {
        let grid = Grid::walled(Dimensions::square(2));
        assert!(grid.has_wall(Pos::new(-1, 0), Direction::Right));
        assert!(!grid.is_visited(Pos::new(9, 9)));
    }
}
