use std::fmt;

use thiserror::Error;

use crate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoxelError {
    #[error("{axis} component {value} is outside the supported range {}..={}", i32::MIN, i32::MAX)]
    InvalidCoordinate { axis: Axis, value: i64 },
    #[error("count at {coordinate} would overflow")]
    Overflow { coordinate: Coordinate },
    #[error("self-test check `{check}` failed: {detail}")]
    SelfTest { check: &'static str, detail: String },
}
