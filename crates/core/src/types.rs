use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` is the column and `y` the row; both are signed so a step off
/// the grid produces a position that bounds checks can reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Axis directions. The discriminant doubles as the wall index on a [`crate::Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Wall-index order; generation scans neighbors in this order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Order in which the solver tries neighbors. Changing it changes which path is found.
    pub const SOLVE_ORDER: [Direction; 4] =
        [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    pub const fn wall_index(self) -> usize {
        self as usize
    }

    pub const fn from_wall_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// `(dx, dy)` for one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction leading from `from` to an orthogonally adjacent `to`.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| from.step(*direction) == to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn square(size: usize) -> Self {
        Self { rows: size, cols: size }
    }

    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub const fn entry(self) -> Pos {
        Pos { y: 0, x: 0 }
    }

    /// Bottom-right corner. Only meaningful for non-empty dimensions.
    pub const fn exit(self) -> Pos {
        Pos { y: self.rows as i32 - 1, x: self.cols as i32 - 1 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    /// Row-major index of `pos`, or `None` when it lies outside.
    pub fn index_of(self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| (pos.y as usize) * self.cols + (pos.x as usize))
    }

    pub fn pos_at(self, index: usize) -> Pos {
        Pos { y: (index / self.cols) as i32, x: (index % self.cols) as i32 }
    }
}
