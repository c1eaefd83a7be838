use logging::{log, LOG_MODEL};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::{Coordinate, VoxelError};

/**
 * Sparse hit counter over integer 3D space.
 *
 * Only coordinates that were added at least once occupy memory, so a model
 * that was hammered at one voxel holds exactly one entry. Reading any other
 * coordinate yields 0.
 */
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VoxelModel {
    counts: FxHashMap<Coordinate, u64>,
}

impl VoxelModel {
    pub fn new() -> Self {
        Self::default()
    }

    /**
     * Increments the count at (x, y, z) by one and returns the new count.
     */
    pub fn add(&mut self, x: i64, y: i64, z: i64) -> Result<u64, VoxelError> {
        let coordinate = Coordinate::try_new(x, y, z)?;
        self.add_at(coordinate)
    }

    /**
     * Returns the count at (x, y, z), 0 if it was never added.
     */
    pub fn read(&self, x: i64, y: i64, z: i64) -> Result<u64, VoxelError> {
        let coordinate = Coordinate::try_new(x, y, z)?;
        Ok(self.read_at(coordinate))
    }

    pub fn add_at(&mut self, coordinate: Coordinate) -> Result<u64, VoxelError> {
        self.add_n(coordinate, 1)
    }

    pub fn read_at(&self, coordinate: Coordinate) -> u64 {
        self.counts.get(&coordinate).copied().unwrap_or(0)
    }

    /**
     * Same as calling `add_at` n times. Either all n increments happen or,
     * on overflow, none of them.
     */
    pub fn add_n(&mut self, coordinate: Coordinate, n: u64) -> Result<u64, VoxelError> {
        if n == 0 {
            return Ok(self.read_at(coordinate));
        }

        let count = self.counts.entry(coordinate).or_insert(0);
        match count.checked_add(n) {
            Some(new_count) => {
                *count = new_count;
                Ok(new_count)
            }
            None => Err(VoxelError::Overflow { coordinate }),
        }
    }

    /// Number of distinct coordinates stored.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u128 {
        self.counts.values().map(|&count| count as u128).sum()
    }

    /// All stored (coordinate, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, u64)> + '_ {
        self.counts.iter().map(|(coordinate, count)| (*coordinate, *count))
    }

    /**
     * Adds every count of `other` to this model. Nothing is changed if any
     * resulting count would overflow.
     */
    pub fn merge(&mut self, other: &VoxelModel) -> Result<(), VoxelError> {
        if let Some((coordinate, _)) = other
            .iter()
            .find(|&(coordinate, count)| self.read_at(coordinate).checked_add(count).is_none())
        {
            log::warn!("Merge rejected, count at {coordinate} would overflow");
            return Err(VoxelError::Overflow { coordinate });
        }

        self.counts.reserve(other.len());
        for (coordinate, count) in other.iter() {
            *self.counts.entry(coordinate).or_insert(0) += count;
        }

        Ok(())
    }

    /**
     * Counts every coordinate in the slice using the rayon thread pool.
     * Each worker fills its own model; the partial models are merged at the end.
     */
    pub fn accumulate_parallel(coordinates: &[Coordinate]) -> Result<Self, VoxelError> {
        let model = coordinates
            .par_iter()
            .try_fold(VoxelModel::new, |mut model, &coordinate| {
                model.add_at(coordinate)?;
                Ok::<_, VoxelError>(model)
            })
            .try_reduce(VoxelModel::new, |left, right| {
                let (mut larger, smaller) = if left.len() >= right.len() {
                    (left, right)
                } else {
                    (right, left)
                };
                larger.merge(&smaller)?;
                Ok::<_, VoxelError>(larger)
            })?;

        log!(
            *LOG_MODEL,
            "Accumulated {} adds into {} voxels",
            coordinates.len(),
            model.len()
        );

        Ok(model)
    }
}
