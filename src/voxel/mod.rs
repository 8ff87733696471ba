/// Voxel scene data: the id grid and the material palette
pub mod block_type;
pub mod grid;

pub use block_type::{BlockMaterial, BlockPalette, AIR};
pub use grid::VoxelGrid;
