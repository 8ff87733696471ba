pub mod camera;
pub mod rendering;
/// Blocktracer - real-time voxel ray tracer
/// Brute-force traced blocks with recursive transparency and temporal accumulation
pub mod scene;
pub mod voxel;

pub use camera::{Camera, CameraController};
pub use rendering::{
    blend, intersect_box, pack_rgb, AccumulationBuffer, BoxHit, Renderer, Sampler, MAX_RAY_DEPTH,
};
pub use scene::{Scene, SceneConfig, SceneError};
pub use voxel::{BlockMaterial, BlockPalette, VoxelGrid, AIR};
