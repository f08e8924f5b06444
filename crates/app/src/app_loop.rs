use std::time::Duration;

use macroquad::prelude::KeyCode;
use maze_core::{ControllerEvent, MAX_MAZE_SIZE, MIN_MAZE_SIZE, MazeController};

use crate::SPEED_STEP_MS;

/// Longest text the size field accepts.
const SIZE_FIELD_MAX_LEN: usize = 3;
/// Longest text the speed field accepts.
const SPEED_FIELD_MAX_LEN: usize = 4;

/// Keyboard state collected for one frame, plus the frame's elapsed time.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub typed: Vec<char>,
    pub elapsed: Duration,
}

/// A message shown to the user until the next action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SizeRejected,
    SpeedRejected(String),
    NoPath(String),
    MazeComplete,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::SizeRejected => {
                format!("Maze size must be between {MIN_MAZE_SIZE} and {MAX_MAZE_SIZE}")
            }
            Notice::SpeedRejected(reason) => format!("Speed unchanged: {reason}"),
            Notice::NoPath(reason) => format!("No path found: {reason}"),
            Notice::MazeComplete => "Maze complete!".to_string(),
        }
    }
}

/// Digit-only text input. After a commit or a revert the shown value is replaced by
/// the next digit typed instead of being appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    text: String,
    max_len: usize,
    replace_on_type: bool,
}

impl NumberField {
    fn showing(value: u64, max_len: usize) -> Self {
        Self { text: value.to_string(), max_len, replace_on_type: true }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn reset(&mut self, value: u64) {
        self.text = value.to_string();
        self.replace_on_type = true;
    }

    fn type_char(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        if self.replace_on_type {
            self.text.clear();
            self.replace_on_type = false;
        }
        if self.text.len() < self.max_len {
            self.text.push(ch);
        }
    }

    fn backspace(&mut self) {
        self.replace_on_type = false;
        self.text.pop();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Size,
    Speed,
}

#[derive(Debug)]
pub struct AppState {
    /// Maze side length. Committed with Enter.
    pub size_field: NumberField,
    /// Step interval in milliseconds. Committed with Enter.
    pub speed_field: NumberField,
    /// Field receiving typed digits; Tab switches it.
    pub focus: FieldFocus,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Takes over the controller's pending events so the first frame's input is not
    /// overwritten by the initial maze's `Regenerated`.
    pub fn new(controller: &mut MazeController) -> Self {
        controller.drain_events();
        Self {
            size_field: NumberField::showing(controller.size() as u64, SIZE_FIELD_MAX_LEN),
            speed_field: NumberField::showing(interval_ms(controller), SPEED_FIELD_MAX_LEN),
            focus: FieldFocus::Size,
            notice: None,
        }
    }

    /// Applies one frame of input to the controller, then advances the animation clock.
    pub fn tick(&mut self, controller: &mut MazeController, input: &FrameInput) {
        self.edit_fields(controller, input);

        if input.keys_pressed.contains(&KeyCode::Space)
            && let Err(error) = controller.start()
        {
            self.notice = Some(Notice::NoPath(error.to_string()));
        }
        if input.keys_pressed.contains(&KeyCode::S)
            && let Err(error) = controller.show_solution()
        {
            self.notice = Some(Notice::NoPath(error.to_string()));
        }
        if input.keys_pressed.contains(&KeyCode::R) {
            controller.regenerate();
        }
        if input.keys_pressed.contains(&KeyCode::Up) {
            self.nudge_speed(controller, SPEED_STEP_MS as i64);
        }
        if input.keys_pressed.contains(&KeyCode::Down) {
            self.nudge_speed(controller, -(SPEED_STEP_MS as i64));
        }

        controller.advance(input.elapsed);
        for event in controller.drain_events() {
            self.apply_event(&event);
        }
    }

    /// Keeps field text and notices in sync with controller state changes.
    pub fn apply_event(&mut self, event: &ControllerEvent) {
        match event {
            ControllerEvent::Regenerated { dims, .. } => {
                self.size_field.reset(dims.rows as u64);
                self.notice = None;
            }
            ControllerEvent::SizeRejected { restored, .. } => {
                self.size_field.reset(*restored as u64);
            }
            ControllerEvent::SpeedRejected { restored, .. } => {
                self.speed_field.reset(u64::try_from(restored.as_millis()).unwrap_or(u64::MAX));
            }
            ControllerEvent::AnimationStarted { .. } => self.notice = None,
            ControllerEvent::AnimationFinished => self.notice = Some(Notice::MazeComplete),
            _ => {}
        }
    }

    fn focused_field(&mut self) -> &mut NumberField {
        match self.focus {
            FieldFocus::Size => &mut self.size_field,
            FieldFocus::Speed => &mut self.speed_field,
        }
    }

    fn edit_fields(&mut self, controller: &mut MazeController, input: &FrameInput) {
        if input.keys_pressed.contains(&KeyCode::Tab) {
            self.focus = match self.focus {
                FieldFocus::Size => FieldFocus::Speed,
                FieldFocus::Speed => FieldFocus::Size,
            };
        }
        for ch in &input.typed {
            self.focused_field().type_char(*ch);
        }
        if input.keys_pressed.contains(&KeyCode::Backspace) {
            self.focused_field().backspace();
        }
        if input.keys_pressed.contains(&KeyCode::Enter)
            || input.keys_pressed.contains(&KeyCode::KpEnter)
        {
            match self.focus {
                FieldFocus::Size => self.commit_size(controller),
                FieldFocus::Speed => self.commit_speed(controller),
            }
        }
    }

    fn commit_size(&mut self, controller: &mut MazeController) {
        match controller.request_resize(self.size_field.text()) {
            Ok(size) => self.size_field.reset(size as u64),
            Err(_) => self.notice = Some(Notice::SizeRejected),
        }
    }

    fn commit_speed(&mut self, controller: &mut MazeController) {
        match controller.request_step_interval(self.speed_field.text()) {
            Ok(_) => self.speed_field.reset(interval_ms(controller)),
            Err(error) => self.notice = Some(Notice::SpeedRejected(error.to_string())),
        }
    }

    fn nudge_speed(&mut self, controller: &mut MazeController, delta_ms: i64) {
        let current = i64::try_from(interval_ms(controller)).unwrap_or(i64::MAX);
        let next = current.saturating_add(delta_ms).max(0) as u64;
        match controller.set_step_interval(Duration::from_millis(next)) {
            Ok(()) => self.speed_field.reset(interval_ms(controller)),
            Err(error) => self.notice = Some(Notice::SpeedRejected(error.to_string())),
        }
    }
}

fn interval_ms(controller: &MazeController) -> u64 {
    u64::try_from(controller.step_interval().as_millis()).unwrap_or(u64::MAX)
}
