//! Ordered entry-to-exit walks and their structural checks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Grid;
use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MazePath {
    steps: Vec<Pos>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathDefect {
    #[error("path is empty")]
    Empty,
    #[error("path starts at {found:?} instead of the entry")]
    WrongStart { found: Pos },
    #[error("path ends at {found:?} instead of the exit")]
    WrongEnd { found: Pos },
    #[error("path leaves the grid at {pos:?}")]
    OutOfBounds { pos: Pos },
    #[error("{from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: Pos, to: Pos },
    #[error("step from {from:?} to {to:?} crosses a wall")]
    WallCrossed { from: Pos, to: Pos },
    #[error("path visits {pos:?} more than once")]
    RepeatedCell { pos: Pos },
}

impl MazePath {
    pub fn new(steps: Vec<Pos>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Pos] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<Pos> {
        self.steps.first().copied()
    }

    pub fn last(&self) -> Option<Pos> {
        self.steps.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<Pos> {
        self.steps.get(index).copied()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.steps.contains(&pos)
    }

    /// Checks that the path runs entry to exit through carved passages without revisits.
    pub fn validate(&self, grid: &Grid) -> Result<(), PathDefect> {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return Err(PathDefect::Empty);
        };
        let dims = grid.dims();
        if first != dims.entry() {
            return Err(PathDefect::WrongStart { found: first });
        }
        if last != dims.exit() {
            return Err(PathDefect::WrongEnd { found: last });
        }

        let mut seen = BTreeSet::new();
        for pos in &self.steps {
            if !grid.in_bounds(*pos) {
                return Err(PathDefect::OutOfBounds { pos: *pos });
            }
            if !seen.insert(*pos) {
                return Err(PathDefect::RepeatedCell { pos: *pos });
            }
        }

        for pair in self.steps.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let Some(direction) = Direction::between(from, to) else {
                return Err(PathDefect::NotAdjacent { from, to });
            };
            if grid.passage(from, direction).is_none() {
                return Err(PathDefect::WallCrossed { from, to });
            }
        }
        Ok(())
    }
}
