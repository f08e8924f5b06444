use maze_core::{Dimensions, enumerate_paths, generate_maze, solve};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

fn check_maze(seed: u64, rows: usize, cols: usize) -> Result<(), String> {
    let dims = Dimensions::new(rows, cols);
    let grid = generate_maze(seed, dims);
    let label = format!("{rows}x{cols} seed {seed}");

    if !grid.all_visited() {
        return Err(format!("Invariant failed: unvisited cell in {label}"));
    }
    if let Some((pos, direction)) = grid.asymmetric_walls().first() {
        return Err(format!("Invariant failed: one-sided wall at {pos:?} {direction:?} in {label}"));
    }
    if !grid.open_border_sides().is_empty() {
        return Err(format!("Invariant failed: border opened in {label}"));
    }
    if grid.carved_edge_count() != rows * cols - 1 {
        return Err(format!(
            "Invariant failed: {} passages instead of {} in {label}",
            grid.carved_edge_count(),
            rows * cols - 1
        ));
    }

    let path = solve(&grid).map_err(|error| format!("Invariant failed: {error} in {label}"))?;
    path.validate(&grid).map_err(|defect| format!("Invariant failed: {defect} in {label}"))?;

    let all_paths = enumerate_paths(&grid, 2);
    if all_paths != vec![path] {
        return Err(format!(
            "Invariant failed: {} entry-to-exit paths in {label}",
            all_paths.len()
        ));
    }
    Ok(())
}

#[test]
fn test_generated_mazes_are_perfect() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (any::<u64>(), 1_usize..=30, 1_usize..=30);

    runner
        .run(&inputs, |(seed, rows, cols)| {
            check_maze(seed, rows, cols).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("generated mazes should satisfy every perfect-maze invariant");
}

#[test]
fn test_supported_size_extremes_are_perfect() {
    for size in [5, 50] {
        check_maze(2024, size, size).expect("extreme sizes must hold the invariants");
    }
}
