use life_core::{CellState, Density, Dimensions};
use life_system_seeding::{seed, Seeder};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

fn dimensions(rows: u32, cols: u32) -> Dimensions {
    Dimensions::new(rows, cols).expect("valid dimensions")
}

#[test]
fn zero_density_yields_all_dead_grid() {
    let mut seeder = Seeder::from_seed(7);
    for _ in 0..10 {
        let grid = seeder.seed(dimensions(13, 29), Density::EMPTY);
        assert_eq!(grid.live_cells(), 0);
    }
}

#[test]
fn full_density_yields_all_alive_grid() {
    let mut seeder = Seeder::from_seed(7);
    for _ in 0..10 {
        let grid = seeder.seed(dimensions(13, 29), Density::FULL);
        assert_eq!(grid.live_cells(), 13 * 29);
        assert!(grid.cells().iter().all(|cell| *cell == CellState::Alive));
    }
}

#[test]
fn seeded_grid_matches_requested_dimensions() {
    let mut seeder = Seeder::from_seed(1);
    let grid = seeder.seed(dimensions(25, 150), Density::default());
    assert_eq!(grid.rows(), 25);
    assert_eq!(grid.cols(), 150);
    assert_eq!(grid.cells().len(), 25 * 150);
}

#[test]
fn same_seed_reproduces_same_grid() {
    let density = Density::new(0.3).expect("valid density");
    let first = Seeder::from_seed(0x5eed).seed(dimensions(20, 40), density);
    let second = Seeder::from_seed(0x5eed).seed(dimensions(20, 40), density);
    assert_eq!(first, second);
}

#[test]
fn consecutive_seeds_differ() {
    let mut seeder = Seeder::from_seed(99);
    let first = seeder.seed(dimensions(20, 40), Density::default());
    let second = seeder.seed(dimensions(20, 40), Density::default());
    assert_ne!(first, second, "each reseed draws fresh randomness");
}

#[test]
fn live_fraction_tracks_density() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x1234_5678);
    let dims = dimensions(200, 200);
    for &target in &[0.1, 0.5, 0.9] {
        let grid = seed(dims, Density::new(target).expect("valid"), &mut rng);
        let fraction = grid.live_cells() as f64 / dims.cell_count() as f64;
        assert!(
            (fraction - target).abs() < 0.02,
            "density {target} produced live fraction {fraction}"
        );
    }
}
