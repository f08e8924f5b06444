mod frame_input;
mod maze_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;
use std::path::Path;
use std::process;

use frame_input::capture_frame_input;
use macroquad::Window;
use macroquad::prelude::*;
use maze_app::app_loop::AppState;
use maze_app::format_seed;
use maze_app::launch::{SeedChoice, generate_runtime_seed, parse_launch_args, resolve_seed};
use maze_core::{MazeController, MazeSettings};
use maze_layout::MazeLayout;
use ui_render::draw_frame;
use window_config::build_window_conf;

fn load_settings(path: Option<&Path>) -> MazeSettings {
    let Some(path) = path else {
        return MazeSettings::default();
    };
    match MazeSettings::load(path) {
        Ok(settings) => settings,
        Err(error) => {
            log::error!("{error}; using default settings");
            MazeSettings::default()
        }
    }
}

async fn run(settings: MazeSettings, run_seed: u64) {
    let mut controller = MazeController::new(&settings, run_seed);
    let mut app = AppState::new(&mut controller);

    let mut layout = match MazeLayout::new() {
        Ok(layout) => layout,
        Err(error) => {
            log::error!("failed to build window layout: {error}");
            return;
        }
    };

    loop {
        let input = capture_frame_input();
        app.tick(&mut controller, &input);

        clear_background(WHITE);
        match layout.compute(screen_width(), screen_height()) {
            Ok(frame) => draw_frame(&controller, &app, &frame, settings.cell_px),
            Err(error) => log::warn!("layout failed for this frame: {error}"),
        }

        next_frame().await
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let launch = match parse_launch_args(&args) {
        Ok(launch) => launch,
        Err(error) => {
            log::error!("{error}");
            process::exit(2);
        }
    };
    let settings = load_settings(launch.config_path.as_deref());

    let seed_choice = resolve_seed(launch.seed, settings.seed, generate_runtime_seed());
    match seed_choice {
        SeedChoice::Cli(seed) => log::info!("run seed {} (command line)", format_seed(seed)),
        SeedChoice::Settings(seed) => log::info!("run seed {} (settings)", format_seed(seed)),
        SeedChoice::Generated(seed) => log::info!("run seed {} (generated)", format_seed(seed)),
    }

    Window::from_config(build_window_conf(&settings), run(settings, seed_choice.value()));
}
