pub use coordinate::Coordinate;
pub use error::{Axis, VoxelError};
pub use model::VoxelModel;
pub use selftest::run_tests;

mod coordinate;
mod error;
mod model;
mod selftest;
