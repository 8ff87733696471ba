/// Scene assembly: voxel contents, material palette, camera, and the
/// persistent renderer state, behind a validated construction path.
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::camera::Camera;
use crate::rendering::{Renderer, Sampler, MAX_RAY_DEPTH};
use crate::voxel::{BlockPalette, VoxelGrid, AIR};

/// Construction-time parameters. Rendering itself has no failure paths,
/// so everything that can be malformed is rejected here.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Output buffer dimensions in pixels.
    pub width: usize,
    pub height: usize,
    /// Field of view in degrees.
    pub fov: f32,
    /// Transparency recursion bound per primary ray.
    pub max_ray_depth: u32,
    /// Voxel grid dimensions in cells.
    pub grid_width: usize,
    pub grid_height: usize,
    pub grid_depth: usize,
    /// Color returned by rays that hit nothing.
    pub sky_color: Vec3,
    pub camera_position: Vec3,
    /// Seed for the grid scatter; equal seeds reproduce the scene exactly.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            fov: 30.0,
            max_ray_depth: MAX_RAY_DEPTH,
            grid_width: 8,
            grid_height: 8,
            grid_depth: 8,
            sky_color: Vec3::new(0.6, 0.6, 1.0),
            camera_position: Vec3::new(0.0, 3.0, -10.0),
            seed: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("output dimensions must be non-zero, got {width}x{height}")]
    EmptyOutput { width: usize, height: usize },
    #[error("grid dimensions must be non-zero, got {width}x{height}x{depth}")]
    EmptyGrid {
        width: usize,
        height: usize,
        depth: usize,
    },
    #[error("palette must have between 1 and 256 entries, got {0}")]
    PaletteSize(usize),
    #[error("palette entry 0 must be non-solid air")]
    SolidAir,
}

/// Owns everything a frame reads: the grid and palette stay untouched for
/// the process lifetime after construction, the camera is written once at
/// the top of each frame, and the renderer keeps the accumulation history.
pub struct Scene {
    pub camera: Camera,
    grid: VoxelGrid,
    palette: BlockPalette,
    renderer: Renderer,
    sky_color: Vec3,
    max_ray_depth: u32,
}

impl Scene {
    /// Build a scene from validated configuration, scattering the grid
    /// from the config seed.
    pub fn new(config: SceneConfig, palette: BlockPalette) -> Result<Self, SceneError> {
        if config.width == 0 || config.height == 0 {
            return Err(SceneError::EmptyOutput {
                width: config.width,
                height: config.height,
            });
        }
        if config.grid_width == 0 || config.grid_height == 0 || config.grid_depth == 0 {
            return Err(SceneError::EmptyGrid {
                width: config.grid_width,
                height: config.grid_height,
                depth: config.grid_depth,
            });
        }
        if palette.is_empty() || palette.len() > 256 {
            return Err(SceneError::PaletteSize(palette.len()));
        }
        if palette.get(AIR).solid {
            return Err(SceneError::SolidAir);
        }

        let mut grid = VoxelGrid::new(config.grid_width, config.grid_height, config.grid_depth);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        grid.scatter(&mut rng, palette.len());

        Ok(Self {
            camera: Camera::new(
                config.camera_position,
                config.width,
                config.height,
                config.fov,
            ),
            grid,
            palette,
            renderer: Renderer::new(config.width, config.height),
            sky_color: config.sky_color,
            max_ray_depth: config.max_ray_depth,
        })
    }

    /// Apply this frame's input deltas. Must complete before `render`;
    /// the camera is not written again until the frame is done.
    pub fn update(&mut self, translation: Vec3, rotation: Vec3) {
        self.camera.translate(translation);
        self.camera.rotate(rotation);
    }

    /// Trace the frame into `pixels` (row-major 0x00RRGGBB, one entry per
    /// output pixel).
    pub fn render(&mut self, pixels: &mut [u32]) {
        let sampler = Sampler::new(&self.grid, &self.palette, self.sky_color, self.max_ray_depth);
        self.renderer.render(&self.camera, &sampler, pixels);
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Mutable grid access for scene setup. Must not be called between
    /// `update` and the end of `render`.
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    pub fn palette(&self) -> &BlockPalette {
        &self.palette
    }
}
