use life_core::{CellState, Density, Dimensions, Grid, MAX_NEIGHBORS};
use life_system_neighbors::count_neighbors;
use life_system_seeding::Seeder;

fn random_grid(seeder: &mut Seeder, rows: u32, cols: u32) -> Grid {
    let dimensions = Dimensions::new(rows, cols).expect("valid dimensions");
    seeder.seed(dimensions, Density::new(0.4).expect("valid density"))
}

fn shift(grid: &Grid, d_row: u32, d_col: u32) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    Grid::from_fn(grid.dimensions(), |row, col| {
        let source_row = (row + rows - d_row % rows) % rows;
        let source_col = (col + cols - d_col % cols) % cols;
        grid.get(source_row, source_col).unwrap_or_default()
    })
}

#[test]
fn counts_shift_with_the_grid() {
    let mut seeder = Seeder::from_seed(0xdead_beef);
    for &(rows, cols) in &[(5, 5), (7, 3), (12, 31), (2, 9), (1, 6)] {
        let grid = random_grid(&mut seeder, rows, cols);
        let counts = count_neighbors(&grid);

        for &(d_row, d_col) in &[(1, 0), (0, 1), (3, 2), (rows, cols + 1)] {
            let shifted_counts = count_neighbors(&shift(&grid, d_row, d_col));
            for row in 0..rows {
                for col in 0..cols {
                    let source_row = (row + rows - d_row % rows) % rows;
                    let source_col = (col + cols - d_col % cols) % cols;
                    assert_eq!(
                        shifted_counts.get(row, col),
                        counts.get(source_row, source_col),
                        "{rows}x{cols} grid shifted by ({d_row}, {d_col}) at ({row}, {col})"
                    );
                }
            }
        }
    }
}

#[test]
fn counts_stay_within_moore_bound() {
    let mut seeder = Seeder::from_seed(42);
    for &(rows, cols) in &[(1, 1), (1, 4), (4, 1), (2, 2), (9, 17)] {
        for _ in 0..20 {
            let grid = random_grid(&mut seeder, rows, cols);
            let counts = count_neighbors(&grid);
            assert_eq!(counts.dimensions(), grid.dimensions());
            assert!(counts.counts().iter().all(|&count| count <= MAX_NEIGHBORS));
        }
    }
}

#[test]
fn full_grid_counts_eight_everywhere() {
    let dimensions = Dimensions::new(6, 9).expect("valid dimensions");
    let counts = count_neighbors(&Grid::filled(dimensions, CellState::Alive));
    assert!(counts.counts().iter().all(|&count| count == 8));
}

#[test]
fn single_live_cell_counts_itself_eight_times() {
    let grid = Grid::from_rows(["#"]).expect("valid pattern");
    assert_eq!(count_neighbors(&grid).get(0, 0), Some(8));
}

#[test]
fn single_row_wraparound_counts_neighbors_repeatedly() {
    // Offsets above and below collapse onto the row itself, so each horizontal
    // neighbor is seen three times and the cell itself twice.
    let grid = Grid::from_rows(["#.#.."]).expect("valid pattern");
    let counts = count_neighbors(&grid);
    assert_eq!(counts.get(0, 0), Some(2), "self twice, no live horizontal neighbor");
    assert_eq!(counts.get(0, 1), Some(6), "both live neighbors three times each");
    assert_eq!(counts.get(0, 3), Some(3), "left neighbor three times");
    assert_eq!(counts.get(0, 4), Some(3), "right neighbor wraps to column zero");
}

#[test]
fn single_column_wraparound_mirrors_single_row() {
    let grid = Grid::from_rows(["#", ".", "#", ".", "."]).expect("valid pattern");
    let counts = count_neighbors(&grid);
    assert_eq!(counts.get(0, 0), Some(2));
    assert_eq!(counts.get(1, 0), Some(6));
    assert_eq!(counts.get(3, 0), Some(3));
    assert_eq!(counts.get(4, 0), Some(3));
}

#[test]
fn two_by_two_grid_sees_each_neighbor_twice() {
    let grid = Grid::from_rows(["#.", ".."]).expect("valid pattern");
    let counts = count_neighbors(&grid);
    // (1, 1) reaches (0, 0) through four diagonal offsets.
    assert_eq!(counts.get(1, 1), Some(4));
    assert_eq!(counts.get(0, 1), Some(2));
    assert_eq!(counts.get(1, 0), Some(2));
    assert_eq!(counts.get(0, 0), Some(0));
}
