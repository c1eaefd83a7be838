use std::fmt;

use crate::{Axis, VoxelError};

/// Integer position of a single voxel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

static FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Builds a coordinate from wide components, rejecting any that do not fit in `i32`.
    pub fn try_new(x: i64, y: i64, z: i64) -> Result<Self, VoxelError> {
        Ok(Self::new(
            narrow(Axis::X, x)?,
            narrow(Axis::Y, y)?,
            narrow(Axis::Z, z)?,
        ))
    }

    pub fn checked_offset(&self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// The face-adjacent coordinates. Neighbors that would leave the supported range are skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        FACE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy, dz)| self.checked_offset(dx, dy, dz))
    }
}

fn narrow(axis: Axis, value: i64) -> Result<i32, VoxelError> {
    i32::try_from(value).map_err(|_| VoxelError::InvalidCoordinate { axis, value })
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<(i64, i64, i64)> for Coordinate {
    type Error = VoxelError;

    fn try_from((x, y, z): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::try_new(x, y, z)
    }
}
