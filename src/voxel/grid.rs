/// Dense voxel storage for the traced scene.
/// A single fixed-size grid of palette ids; created once at startup and
/// treated as read-only while any frame is being sampled.
use rand::Rng;

use super::block_type::AIR;

pub struct VoxelGrid {
    width: usize,
    height: usize,
    depth: usize,
    blocks: Vec<u8>,
}

impl VoxelGrid {
    /// All-air grid with the given dimensions.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            blocks: vec![AIR; width * height * depth],
        }
    }

    /// Fill every cell with a uniformly distributed id in [0, type_count).
    /// Air takes part in the draw, so scenes come out partially empty.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, type_count: usize) {
        debug_assert!(type_count >= 1 && type_count <= 256);

        for cell in &mut self.blocks {
            *cell = rng.gen_range(0..type_count) as u8;
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Id at (x, y, z). Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height && z < self.depth);

        self.blocks[self.index(x, y, z)]
    }

    /// Overwrite the id at (x, y, z). Must not run while a frame is in
    /// flight; the sampler reads the grid unsynchronized.
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: u8) {
        debug_assert!(x < self.width && y < self.height && z < self.depth);

        let index = self.index(x, y, z);
        self.blocks[index] = id;
    }

    /// Convert 3D coordinates to a linear index
    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.width * self.height) + (y * self.width) + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_grid_is_all_air() {
        let grid = VoxelGrid::new(4, 3, 2);
        for x in 0..4 {
            for y in 0..3 {
                for z in 0..2 {
                    assert_eq!(grid.get(x, y, z), AIR);
                }
            }
        }
    }

    #[test]
    fn test_scatter_stays_in_range_and_is_reproducible() {
        let mut a = VoxelGrid::new(8, 8, 8);
        let mut b = VoxelGrid::new(8, 8, 8);

        a.scatter(&mut ChaCha8Rng::seed_from_u64(99), 4);
        b.scatter(&mut ChaCha8Rng::seed_from_u64(99), 4);

        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    let id = a.get(x, y, z);
                    assert!(id < 4, "scattered id {} out of palette range", id);
                    assert_eq!(id, b.get(x, y, z), "same seed must fill identically");
                }
            }
        }
    }
}
