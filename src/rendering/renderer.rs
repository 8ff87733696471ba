/// Per-frame ray generation, parallel pixel sampling, and quantization.
use rayon::prelude::*;

use crate::camera::Camera;
use crate::rendering::framebuffer::{blend, AccumulationBuffer};
use crate::rendering::sampler::Sampler;

pub struct Renderer {
    accum: AccumulationBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            accum: AccumulationBuffer::new(width, height),
        }
    }

    /// The persistent accumulation state (inspection/testing).
    pub fn accumulation(&self) -> &AccumulationBuffer {
        &self.accum
    }

    /// Sample every pixel, fold the results into the accumulation buffer,
    /// then quantize into `pixels` (row-major 0x00RRGGBB).
    ///
    /// Rows are the parallel unit: each worker owns a disjoint row slice
    /// of the accumulation buffer and everything else it touches is
    /// read-only, so pixels race on nothing and any evaluation order
    /// produces the same frame. The join at the end of the parallel loop
    /// is the barrier between sampling writes and the quantization read.
    pub fn render(&mut self, camera: &Camera, sampler: &Sampler<'_>, pixels: &mut [u32]) {
        let width = self.accum.width();
        let angle = camera.fov_tangent();
        let origin = camera.position;

        self.accum
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    let ray = camera.primary_ray(x, y, angle);
                    *slot = blend(*slot, sampler.sample(origin, ray, 0));
                }
            });

        self.accum.quantize_into(pixels);
    }
}
