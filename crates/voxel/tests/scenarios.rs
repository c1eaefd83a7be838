use std::time::{Duration, Instant};

use voxel::{run_tests, Coordinate, VoxelModel};

#[test]
fn fresh_model_reads_zero_everywhere() {
    let model = VoxelModel::new();

    for (x, y, z) in [(0, 0, 0), (1, 0, 0), (-1, -1, -1), (1 << 30, -(1 << 30), 9)] {
        assert_eq!(model.read(x, y, z), Ok(0));
    }
}

#[test]
fn n_adds_read_back_n() {
    for n in [0, 1, 2, 17, 256] {
        let mut model = VoxelModel::new();
        for _ in 0..n {
            model.add(5, -6, 7).unwrap();
        }
        assert_eq!(model.read(5, -6, 7), Ok(n));
    }
}

#[test]
fn adds_do_not_leak_into_other_coordinates() {
    let mut model = VoxelModel::new();
    for _ in 0..1000 {
        model.add(0, 0, 0).unwrap();
    }

    for neighbor in Coordinate::ORIGIN.neighbors() {
        assert_eq!(model.read_at(neighbor), 0);
    }
    assert_eq!(model.read(-1, -1, -1), Ok(0));
}

#[test]
fn reads_are_idempotent() {
    let mut model = VoxelModel::new();
    model.add(9, 9, 9).unwrap();

    let first = model.read(9, 9, 9);
    for _ in 0..10 {
        assert_eq!(model.read(9, 9, 9), first);
    }
}

#[test]
fn large_volume() {
    let magnitude = 100_000;
    let mut model = VoxelModel::new();

    let start = Instant::now();
    for _ in 0..magnitude {
        model.add(0, 0, 0).unwrap();
    }
    let elapsed = start.elapsed();

    assert_eq!(model.read(0, 0, 0), Ok(magnitude));
    assert_eq!(model.read(1, 0, 0), Ok(0));
    assert_eq!(model.len(), 1);
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn small_volume() {
    let mut model = VoxelModel::new();
    for _ in 0..100 {
        model.add(0, 0, 0).unwrap();
    }

    assert_eq!(model.read(0, 0, 0), Ok(100));
    assert_eq!(model.read(1, 0, 0), Ok(0));
}

#[test]
fn self_test_passes() {
    assert!(run_tests().is_ok());
}

#[test]
fn negative_coordinates() {
    let mut model = VoxelModel::new();
    model.add(-1, -1, -1).unwrap();

    assert_eq!(model.read(-1, -1, -1), Ok(1));
    assert_eq!(model.read(0, 0, 0), Ok(0));
}
