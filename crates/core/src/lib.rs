pub mod controller;
pub mod grid;
pub mod hash;
pub mod mazegen;
pub mod path;
pub mod schedule;
pub mod settings;
pub mod solver;
pub mod types;
pub mod view;

pub use controller::{AnimationState, ControllerEvent, MazeController};
pub use grid::{Cell, Grid};
pub use hash::format_fingerprint;
pub use mazegen::{MazeGenerator, derive_generation_seed, generate_maze};
pub use path::{MazePath, PathDefect};
pub use schedule::{IntervalScheduler, TaskHandle};
pub use settings::*;
pub use solver::{SolveError, enumerate_paths, solve};
pub use types::*;
pub use view::{CellMarkers, CellView, cell_views, render_ascii};
