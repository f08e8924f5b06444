//! The single owner of a session's mutable state: current grid, cached solution,
//! marker position, and the animation task. Input handlers and renderers receive it
//! explicitly; nothing here depends on a UI toolkit.

use std::mem;
use std::time::Duration;

use crate::grid::Grid;
use crate::hash::format_fingerprint;
use crate::mazegen::{derive_generation_seed, generate_maze};
use crate::path::MazePath;
use crate::schedule::{IntervalScheduler, TaskHandle};
use crate::settings::{
    DEFAULT_MAZE_SIZE, MazeSettings, SizeError, SpeedError, parse_size_input,
    parse_step_interval_input, validate_size, validate_step_interval,
};
use crate::solver::{SolveError, solve};
use crate::types::{Dimensions, Pos};
use crate::view::{CellView, cell_views};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating {
        task: TaskHandle,
        path: MazePath,
        /// Index of the position the next firing moves the marker to.
        next_step: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    Regenerated { dims: Dimensions, generation: u64, fingerprint: u64 },
    SizeRejected { error: SizeError, restored: usize },
    SpeedRejected { error: SpeedError, restored: Duration },
    SolveFailed(SolveError),
    AnimationStarted { steps: usize, interval: Duration },
    AnimationCancelled,
    PlayerMoved(Pos),
    AnimationFinished,
    SolutionShown { steps: usize },
}

pub struct MazeController {
    run_seed: u64,
    generation: u64,
    size: usize,
    step_interval: Duration,
    grid: Grid,
    solution: Option<MazePath>,
    highlight_solution: bool,
    player: Option<Pos>,
    animation: AnimationState,
    scheduler: IntervalScheduler,
    events: Vec<ControllerEvent>,
}

impl MazeController {
    /// Builds the first maze of a session. Settings are expected to be validated;
    /// out-of-range values fall back to defaults.
    pub fn new(settings: &MazeSettings, run_seed: u64) -> Self {
        let size = i64::try_from(settings.size)
            .map_err(|_| SizeError::OutOfRange(i64::MAX))
            .and_then(validate_size)
            .unwrap_or_else(|error| {
                log::warn!("{error}; using size {DEFAULT_MAZE_SIZE}");
                DEFAULT_MAZE_SIZE
            });
        let step_interval = i64::try_from(settings.step_interval_ms)
            .map_err(|_| SpeedError::OutOfRange(i64::MAX))
            .and_then(validate_step_interval)
            .unwrap_or_else(|error| {
                log::warn!("{error}; using the default step interval");
                MazeSettings::default().step_interval()
            });

        let mut controller = Self {
            run_seed,
            generation: 0,
            size,
            step_interval,
            grid: Grid::walled(Dimensions::square(0)),
            solution: None,
            highlight_solution: false,
            player: None,
            animation: AnimationState::Idle,
            scheduler: IntervalScheduler::new(),
            events: Vec::new(),
        };
        controller.replace_grid();
        controller
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    /// How many times the maze has been regenerated in this session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn generation_seed(&self) -> u64 {
        derive_generation_seed(self.run_seed, self.generation)
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn solution(&self) -> Option<&MazePath> {
        self.solution.as_ref()
    }

    pub fn is_solution_highlighted(&self) -> bool {
        self.highlight_solution && self.solution.is_some()
    }

    pub fn player(&self) -> Option<Pos> {
        self.player
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.animation, AnimationState::Animating { .. })
    }

    /// Live advancement tasks. Never more than one.
    pub fn active_timer_count(&self) -> usize {
        self.scheduler.active_count()
    }

    pub fn cell_views(&self) -> Vec<CellView> {
        let highlighted = self.solution.as_ref().filter(|_| self.highlight_solution);
        cell_views(&self.grid, self.player, highlighted)
    }

    /// Events emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        mem::take(&mut self.events)
    }

    /// Carves a fresh maze at the current size.
    pub fn regenerate(&mut self) {
        self.generation += 1;
        self.replace_grid();
    }

    /// Applies raw size-field text. Rejected input leaves the current size in place.
    pub fn request_resize(&mut self, raw: &str) -> Result<usize, SizeError> {
        match parse_size_input(raw) {
            Ok(size) => {
                self.apply_size(size);
                Ok(size)
            }
            Err(error) => Err(self.reject_size(error)),
        }
    }

    pub fn resize(&mut self, size: usize) -> Result<(), SizeError> {
        let checked = i64::try_from(size)
            .map_err(|_| SizeError::OutOfRange(i64::MAX))
            .and_then(validate_size);
        match checked {
            Ok(size) => {
                self.apply_size(size);
                Ok(())
            }
            Err(error) => Err(self.reject_size(error)),
        }
    }

    /// Applies raw speed-field text. The running animation keeps the interval it
    /// started with; the new one applies from the next start.
    pub fn request_step_interval(&mut self, raw: &str) -> Result<Duration, SpeedError> {
        match parse_step_interval_input(raw) {
            Ok(interval) => {
                self.step_interval = interval;
                Ok(interval)
            }
            Err(error) => Err(self.reject_speed(error)),
        }
    }

    pub fn set_step_interval(&mut self, interval: Duration) -> Result<(), SpeedError> {
        let millis = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX);
        match validate_step_interval(millis) {
            Ok(interval) => {
                self.step_interval = interval;
                Ok(())
            }
            Err(error) => Err(self.reject_speed(error)),
        }
    }

    /// Solves the current grid, reusing the cached path when there is one.
    pub fn ensure_solution(&mut self) -> Result<&MazePath, SolveError> {
        let path = match self.solution.take() {
            Some(path) => path,
            None => match solve(&self.grid) {
                Ok(path) => path,
                Err(error) => {
                    log::error!(
                        "solver failed on maze {}: {error}",
                        format_fingerprint(self.grid.fingerprint())
                    );
                    self.events.push(ControllerEvent::SolveFailed(error.clone()));
                    return Err(error);
                }
            },
        };
        let path: &MazePath = self.solution.insert(path);
        Ok(path)
    }

    /// Clears the path highlight, puts the marker on the entry, and starts walking the
    /// solution. Any animation already running is cancelled first.
    pub fn start(&mut self) -> Result<(), SolveError> {
        self.cancel_animation();
        self.highlight_solution = false;
        self.player = (!self.grid.is_empty()).then(|| self.grid.dims().entry());

        let path = self.ensure_solution()?.clone();
        let interval = self.step_interval;
        let task = self.scheduler.schedule_every(interval);
        log::debug!("animation started: {} steps every {interval:?}", path.len());
        self.events.push(ControllerEvent::AnimationStarted { steps: path.len(), interval });
        self.animation = AnimationState::Animating { task, path, next_step: 0 };
        Ok(())
    }

    /// Highlights every cell on the solution without animating.
    pub fn show_solution(&mut self) -> Result<(), SolveError> {
        let steps = self.ensure_solution()?.len();
        self.highlight_solution = true;
        if self.player.is_none() {
            self.player = Some(self.grid.dims().entry());
        }
        self.events.push(ControllerEvent::SolutionShown { steps });
        Ok(())
    }

    /// Advances the animation clock by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut remaining = elapsed;
        while let Some(handle) = self.scheduler.fire_next(&mut remaining) {
            self.on_timer(handle);
        }
    }

    fn on_timer(&mut self, handle: TaskHandle) {
        let AnimationState::Animating { task, path, next_step } = &mut self.animation else {
            return;
        };
        if *task != handle {
            return;
        }
        match path.get(*next_step) {
            Some(pos) => {
                *next_step += 1;
                self.player = Some(pos);
                self.events.push(ControllerEvent::PlayerMoved(pos));
            }
            None => {
                let task = *task;
                self.scheduler.cancel(task);
                self.animation = AnimationState::Idle;
                log::info!("maze complete, marker at {:?}", self.player);
                self.events.push(ControllerEvent::AnimationFinished);
            }
        }
    }

    fn cancel_animation(&mut self) {
        if let AnimationState::Animating { task, .. } =
            mem::replace(&mut self.animation, AnimationState::Idle)
        {
            self.scheduler.cancel(task);
            log::debug!("animation cancelled");
            self.events.push(ControllerEvent::AnimationCancelled);
        }
    }

    fn apply_size(&mut self, size: usize) {
        self.size = size;
        self.regenerate();
    }

    fn reject_size(&mut self, error: SizeError) -> SizeError {
        log::warn!("rejected maze size: {error}; keeping {}", self.size);
        self.events.push(ControllerEvent::SizeRejected { error: error.clone(), restored: self.size });
        error
    }

    fn reject_speed(&mut self, error: SpeedError) -> SpeedError {
        log::warn!("rejected step interval: {error}; keeping {:?}", self.step_interval);
        self.events.push(ControllerEvent::SpeedRejected {
            error: error.clone(),
            restored: self.step_interval,
        });
        error
    }

    fn replace_grid(&mut self) {
        self.cancel_animation();
        let dims = Dimensions::square(self.size);
        self.grid = generate_maze(self.generation_seed(), dims);
        self.solution = None;
        self.highlight_solution = false;
        self.player = None;

        let fingerprint = self.grid.fingerprint();
        log::info!(
            "generated {}x{} maze #{} ({})",
            dims.rows,
            dims.cols,
            self.generation,
            format_fingerprint(fingerprint)
        );
        self.events.push(ControllerEvent::Regenerated {
            dims,
            generation: self.generation,
            fingerprint,
        });
    }
}
