//! Depth-first entry-to-exit search over carved passages.
//! The first path found is returned; it is not necessarily the shortest.

use thiserror::Error;

use crate::grid::Grid;
use crate::path::MazePath;
use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("maze has no cells to search")]
    EmptyGrid,
    #[error("no path from {entry:?} to {exit:?}")]
    NoPath { entry: Pos, exit: Pos },
}

/// One DFS stack entry: the cell plus the index into [`Direction::SOLVE_ORDER`] to try next.
struct Frame {
    pos: Pos,
    next_direction: usize,
}

impl Frame {
    fn new(pos: Pos) -> Self {
        Self { pos, next_direction: 0 }
    }
}

pub fn solve(grid: &Grid) -> Result<MazePath, SolveError> {
    let mut search = Search::new(grid)?;
    match search.next_path(false) {
        Some(path) => Ok(path),
        None => Err(SolveError::NoPath { entry: search.entry, exit: search.exit }),
    }
}

/// Up to `limit` distinct simple entry-to-exit paths, in DFS discovery order.
/// A perfect maze yields exactly one.
pub fn enumerate_paths(grid: &Grid, limit: usize) -> Vec<MazePath> {
    let mut paths = Vec::new();
    let Ok(mut search) = Search::new(grid) else {
        return paths;
    };
    while paths.len() < limit {
        match search.next_path(true) {
            Some(path) => paths.push(path),
            None => break,
        }
    }
    paths
}

struct Search<'a> {
    grid: &'a Grid,
    entry: Pos,
    exit: Pos,
    visited: Vec<bool>,
    stack: Vec<Frame>,
    trivial_pending: bool,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid) -> Result<Self, SolveError> {
        if grid.is_empty() {
            return Err(SolveError::EmptyGrid);
        }
        let dims = grid.dims();
        let entry = dims.entry();
        let exit = dims.exit();
        let mut visited = vec![false; dims.cell_count()];
        let mut stack = Vec::new();
        if entry != exit {
            visited[0] = true;
            stack.push(Frame::new(entry));
        }
        Ok(Self { grid, entry, exit, visited, stack, trivial_pending: entry == exit })
    }

    /// Resumes the search until the exit is reached again. With `backtrack` set, cells
    /// are released when their frame is exhausted so later paths may reuse them.
    fn next_path(&mut self, backtrack: bool) -> Option<MazePath> {
        if self.trivial_pending {
            self.trivial_pending = false;
            return Some(MazePath::new(vec![self.entry]));
        }

        let dims = self.grid.dims();
        while let Some(frame) = self.stack.last_mut() {
            let Some(direction) = Direction::SOLVE_ORDER.get(frame.next_direction).copied()
            else {
                let finished = self.stack.pop().and_then(|done| dims.index_of(done.pos));
                if backtrack && let Some(index) = finished {
                    self.visited[index] = false;
                }
                continue;
            };
            frame.next_direction += 1;

            let Some(next) = self.grid.passage(frame.pos, direction) else {
                continue;
            };
            let Some(index) = dims.index_of(next) else {
                continue;
            };
            if self.visited[index] {
                continue;
            }
            if next == self.exit {
                let mut steps: Vec<Pos> = self.stack.iter().map(|frame| frame.pos).collect();
                steps.push(next);
                return Some(MazePath::new(steps));
            }
            self.visited[index] = true;
            self.stack.push(Frame::new(next));
        }
        None
    }
}
