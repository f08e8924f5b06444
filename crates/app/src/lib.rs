pub mod app_loop;
pub mod launch;

pub const APP_NAME: &str = "Maze Runner";

/// Milliseconds added or removed from the step interval per Up/Down press.
pub const SPEED_STEP_MS: u64 = 10;

/// Format a run seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}
