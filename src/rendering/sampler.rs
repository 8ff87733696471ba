/// Recursive per-ray color evaluation over the voxel grid.
use glam::Vec3;

use crate::rendering::intersect::intersect_box;
use crate::voxel::{BlockMaterial, BlockPalette, VoxelGrid, AIR};

/// Default bound on transparency recursion along one primary ray.
pub const MAX_RAY_DEPTH: u32 = 5;

/// Borrowing view over the immutable state a ray needs: grid contents,
/// material table, sky fallback, and the recursion bound. Cheap to build
/// once per frame and shared read-only across the parallel pixel loop.
#[derive(Copy, Clone)]
pub struct Sampler<'a> {
    grid: &'a VoxelGrid,
    palette: &'a BlockPalette,
    sky_color: Vec3,
    max_depth: u32,
}

impl<'a> Sampler<'a> {
    pub fn new(
        grid: &'a VoxelGrid,
        palette: &'a BlockPalette,
        sky_color: Vec3,
        max_depth: u32,
    ) -> Self {
        Self {
            grid,
            palette,
            sky_color,
            max_depth,
        }
    }

    /// Color seen along `dir` from `origin`. `depth` counts transparency
    /// recursions; primary rays pass 0.
    pub fn sample(&self, origin: Vec3, dir: Vec3, depth: u32) -> Vec3 {
        let mut t_nearest = f32::INFINITY;
        let mut nearest: Option<&BlockMaterial> = None;

        // Brute force over every cell. Scan order is fixed (x outer, then
        // y, then z) so equal-distance hits resolve the same way every
        // frame; the strict `<` keeps the first one encountered.
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                for z in 0..self.grid.depth() {
                    let id = self.grid.get(x, y, z);
                    if id == AIR || !self.palette.contains(id) {
                        continue;
                    }

                    let material = self.palette.get(id);
                    if !material.solid {
                        continue;
                    }

                    // Unit cube at integer grid coordinates.
                    let cell_min = Vec3::new(x as f32, y as f32, z as f32);
                    let cell_max = cell_min + Vec3::ONE;

                    if let Some(hit) = intersect_box(cell_min, cell_max, origin, dir) {
                        // Origin inside this cell: the near crossing is
                        // behind us, the exit face is the visible surface.
                        let t = if hit.t_near < 0.0 {
                            hit.t_far
                        } else {
                            hit.t_near
                        };

                        if t < t_nearest {
                            t_nearest = t;
                            nearest = Some(material);
                        }
                    }
                }
            }
        }

        let Some(material) = nearest else {
            return self.sky_color;
        };

        let hit_point = origin + dir * t_nearest;

        let surface = if material.transparency > 0.0 && depth < self.max_depth {
            // Direction is unchanged: translucent cells filter what lies
            // behind them, they do not refract. At the depth cap the
            // surface renders opaque.
            let behind = self.sample(hit_point, dir, depth + 1);
            behind * material.transparency + material.surface_color * (1.0 - material.transparency)
        } else {
            material.surface_color
        };

        surface + material.emission_color
    }
}
