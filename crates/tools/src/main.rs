use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use maze_core::{
    ControllerEvent, Grid, MazeController, MazePath, MazeSettings, format_fingerprint,
    render_ascii,
};
use serde::Serialize;

/// Seed used when neither the command line nor the settings file names one.
const DEFAULT_SEED: u64 = 42;

#[derive(Parser)]
#[command(author, version, about = "Generate, solve, and animate mazes from the terminal")]
struct Cli {
    /// TOML settings file providing defaults for size, speed, and seed
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a freshly generated maze
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
        /// Print the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a maze with its solution path
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
        /// Print the path as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Walk the solution step by step in real time
    Animate {
        #[command(flatten)]
        maze: MazeArgs,
        /// Milliseconds between marker steps
        #[arg(long)]
        speed: Option<u64>,
    },
}

#[derive(Args)]
struct MazeArgs {
    /// Maze side length in cells
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Run seed; the same seed and size always give the same maze
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GridReport<'a> {
    seed: u64,
    fingerprint: String,
    grid: &'a Grid,
}

#[derive(Serialize)]
struct PathReport<'a> {
    seed: u64,
    fingerprint: String,
    steps: usize,
    path: &'a MazePath,
}

fn load_settings(config: Option<&PathBuf>) -> Result<MazeSettings> {
    match config {
        Some(path) => MazeSettings::load(path)
            .with_context(|| format!("Failed to load settings file: {}", path.display())),
        None => Ok(MazeSettings::default()),
    }
}

fn build_controller(
    base: &MazeSettings,
    maze: &MazeArgs,
    speed: Option<u64>,
) -> Result<MazeController> {
    let mut settings = base.clone();
    if let Some(size) = maze.size {
        settings.size = size;
    }
    if let Some(speed) = speed {
        settings.step_interval_ms = speed;
    }
    let settings = settings.validated().context("Invalid maze options")?;
    let seed = maze.seed.or(settings.seed).unwrap_or(DEFAULT_SEED);
    Ok(MazeController::new(&settings, seed))
}

fn fingerprint_of(controller: &MazeController) -> String {
    format_fingerprint(controller.grid().fingerprint())
}

fn generate(controller: &MazeController, json: bool) -> Result<()> {
    if json {
        let report = GridReport {
            seed: controller.run_seed(),
            fingerprint: fingerprint_of(controller),
            grid: controller.grid(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_ascii(controller.grid(), &controller.cell_views()));
    println!("Seed: {}", controller.run_seed());
    println!("Fingerprint: {}", fingerprint_of(controller));
    Ok(())
}

fn solve(controller: &mut MazeController, json: bool) -> Result<()> {
    controller.show_solution().context("Maze has no solution")?;
    let Some(path) = controller.solution() else {
        bail!("Solver reported success without a path");
    };

    if json {
        let report = PathReport {
            seed: controller.run_seed(),
            fingerprint: fingerprint_of(controller),
            steps: path.len(),
            path,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_ascii(controller.grid(), &controller.cell_views()));
    println!("Steps: {}", path.len());
    let trail: Vec<String> =
        path.steps().iter().map(|pos| format!("({},{})", pos.x, pos.y)).collect();
    println!("Path: {}", trail.join(" -> "));
    Ok(())
}

fn animate(controller: &mut MazeController) -> Result<()> {
    controller.start().context("Maze has no solution")?;
    let interval = controller.step_interval();

    loop {
        thread::sleep(interval);
        controller.advance(interval);
        for event in controller.drain_events() {
            match event {
                ControllerEvent::AnimationStarted { steps, interval } => {
                    println!("Walking {steps} steps every {} ms", interval.as_millis());
                }
                ControllerEvent::PlayerMoved(pos) => println!("Marker at ({},{})", pos.x, pos.y),
                ControllerEvent::AnimationFinished => {
                    println!("Maze complete!");
                    return Ok(());
                }
                _ => {}
            }
        }
        if !controller.is_animating() {
            bail!("Animation stopped before reaching the exit");
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::Generate { maze, json } => {
            let controller = build_controller(&settings, &maze, None)?;
            generate(&controller, json)
        }
        Commands::Solve { maze, json } => {
            let mut controller = build_controller(&settings, &maze, None)?;
            solve(&mut controller, json)
        }
        Commands::Animate { maze, speed } => {
            let mut controller = build_controller(&settings, &maze, speed)?;
            animate(&mut controller)
        }
    }
}
