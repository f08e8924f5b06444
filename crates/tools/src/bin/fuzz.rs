use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{Dimensions, Grid, enumerate_paths, format_fingerprint, generate_maze, solve};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Largest side length the harness picks; matches the app's size limit.
const MAX_SIDE: u64 = 50;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    mazes: u32,
}

fn pick_side(rng: &mut ChaCha8Rng) -> usize {
    (rng.next_u64() % MAX_SIDE + 1) as usize
}

fn check_maze(grid: &Grid) -> Result<()> {
    let dims = grid.dims();
    if !grid.all_visited() {
        bail!("unvisited cell left behind");
    }
    if let Some((pos, direction)) = grid.asymmetric_walls().first() {
        bail!("one-sided wall at {pos:?} facing {direction:?}");
    }
    if !grid.open_border_sides().is_empty() {
        bail!("border wall opened");
    }
    let edges = grid.carved_edge_count();
    if edges != dims.cell_count() - 1 {
        bail!("{edges} passages carved, expected {}", dims.cell_count() - 1);
    }

    let path = solve(grid)?;
    path.validate(grid)?;
    let paths = enumerate_paths(grid, 2);
    if paths != [path] {
        bail!("{} distinct entry-to-exit paths", paths.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} mazes...", args.seed, args.mazes);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for index in 0..args.mazes {
        let dims = Dimensions::new(pick_side(&mut rng), pick_side(&mut rng));
        let maze_seed = rng.next_u64();
        let grid = generate_maze(maze_seed, dims);

        if let Err(error) = check_maze(&grid) {
            bail!(
                "Invariant failed on maze #{index} ({}x{}, seed {maze_seed}, {}): {error}",
                dims.rows,
                dims.cols,
                format_fingerprint(grid.fingerprint())
            );
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
