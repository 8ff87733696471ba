/// Persistent accumulation storage for temporal smoothing, plus the
/// quantization pass that turns accumulated colors into packed pixels.
///
/// The buffer lives for the whole program: each frame folds its fresh
/// samples into whatever the previous frames left behind.
use glam::Vec3;

pub struct AccumulationBuffer {
    width: usize,
    height: usize,
    data: Vec<Vec3>,
}

impl AccumulationBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Vec3::ZERO; width * height],
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

    /// Accumulated colors, row-major.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.data
    }

    /// Mutable flat access for the pixel loop; the renderer carves this
    /// into disjoint rows so parallel workers never share a slot.
    pub fn as_mut_slice(&mut self) -> &mut [Vec3] {
        &mut self.data
    }

    /// Quantize every accumulated color into `pixels` (row-major, one u32
    /// per pixel). Must run only after the frame's sampling writes have
    /// all completed; it reads the slots those writes produced.
    pub fn quantize_into(&self, pixels: &mut [u32]) {
        debug_assert_eq!(pixels.len(), self.data.len());

        for (pixel, color) in pixels.iter_mut().zip(self.data.iter()) {
            *pixel = pack_rgb(*color);
        }
    }
}

/// Fold a fresh sample into the previous accumulated value. The fixed 0.5
/// weight half-decays the history toward the newest sample each frame;
/// there is no frame counter and no convergence target.
#[inline]
pub fn blend(previous: Vec3, sample: Vec3) -> Vec3 {
    0.5 * (sample + previous)
}

/// Clamp each channel to [0, 1], scale to 8 bits, pack as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(color: Vec3) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u32;

    (r << 16) | (g << 8) | b
}
