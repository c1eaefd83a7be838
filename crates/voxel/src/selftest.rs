use logging::{log, LOG_SELFTEST};

use crate::{Coordinate, VoxelError, VoxelModel};

type Check = fn() -> Result<(), VoxelError>;

const CHECKS: [(&str, Check); 8] = [
    ("zero_default", zero_default),
    ("increment", increment),
    ("isolation", isolation),
    ("idempotent_reads", idempotent_reads),
    ("negative_coordinates", negative_coordinates),
    ("small_volume", small_volume),
    ("invalid_coordinate", invalid_coordinate),
    ("overflow", overflow),
];

/**
 * Runs the built-in correctness checks against private models.
 * Returns the first failure as `VoxelError::SelfTest`.
 */
pub fn run_tests() -> Result<(), VoxelError> {
    run_checks(&CHECKS)
}

fn run_checks(checks: &[(&'static str, Check)]) -> Result<(), VoxelError> {
    log!(*LOG_SELFTEST, "Running {} checks", checks.len());

    for &(name, check) in checks {
        check().map_err(|error| match error {
            VoxelError::SelfTest { .. } => error,
            other => VoxelError::SelfTest {
                check: name,
                detail: other.to_string(),
            },
        })?;
        log::debug!("Self-test check {name} passed");
    }

    log!(*LOG_SELFTEST, "All checks passed");
    Ok(())
}

fn expect_count(
    check: &'static str,
    model: &VoxelModel,
    coordinate: Coordinate,
    expected: u64,
) -> Result<(), VoxelError> {
    let actual = model.read_at(coordinate);
    if actual == expected {
        Ok(())
    } else {
        Err(VoxelError::SelfTest {
            check,
            detail: format!("expected {expected} at {coordinate}, got {actual}"),
        })
    }
}

fn zero_default() -> Result<(), VoxelError> {
    let model = VoxelModel::new();
    for coordinate in [
        Coordinate::ORIGIN,
        Coordinate::new(1, 0, 0),
        Coordinate::new(i32::MIN, i32::MAX, -1),
    ] {
        expect_count("zero_default", &model, coordinate, 0)?;
    }
    Ok(())
}

fn increment() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    let coordinate = Coordinate::new(7, -3, 2);
    for n in 1..=10 {
        let returned = model.add_at(coordinate)?;
        if returned != n {
            return Err(VoxelError::SelfTest {
                check: "increment",
                detail: format!("add returned {returned}, expected {n}"),
            });
        }
        expect_count("increment", &model, coordinate, n)?;
    }
    Ok(())
}

fn isolation() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    let target = Coordinate::new(10, 10, 10);
    model.add_n(target, 500)?;

    for neighbor in target.neighbors() {
        expect_count("isolation", &model, neighbor, 0)?;
    }
    expect_count("isolation", &model, target, 500)
}

fn idempotent_reads() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    model.add(0, 1, 2)?;
    model.add(0, 1, 2)?;

    for _ in 0..3 {
        expect_count("idempotent_reads", &model, Coordinate::new(0, 1, 2), 2)?;
    }
    Ok(())
}

fn negative_coordinates() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    model.add(-1, -1, -1)?;

    expect_count("negative_coordinates", &model, Coordinate::new(-1, -1, -1), 1)?;
    expect_count("negative_coordinates", &model, Coordinate::ORIGIN, 0)?;
    expect_count("negative_coordinates", &model, Coordinate::new(1, 1, 1), 0)
}

fn small_volume() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    for _ in 0..100 {
        model.add(0, 0, 0)?;
    }

    expect_count("small_volume", &model, Coordinate::ORIGIN, 100)?;
    expect_count("small_volume", &model, Coordinate::new(1, 0, 0), 0)
}

fn invalid_coordinate() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    match model.add(i64::MAX, 0, 0) {
        Err(VoxelError::InvalidCoordinate { .. }) if model.is_empty() => Ok(()),
        other => Err(VoxelError::SelfTest {
            check: "invalid_coordinate",
            detail: format!("out-of-range add gave {other:?}"),
        }),
    }
}

fn overflow() -> Result<(), VoxelError> {
    let mut model = VoxelModel::new();
    let coordinate = Coordinate::new(0, 0, 1);
    model.add_n(coordinate, u64::MAX)?;

    match model.add_at(coordinate) {
        Err(VoxelError::Overflow { .. }) => expect_count("overflow", &model, coordinate, u64::MAX),
        other => Err(VoxelError::SelfTest {
            check: "overflow",
            detail: format!("saturated add gave {other:?}"),
        }),
    }
}
