pub mod framebuffer;
/// Software ray tracing pipeline
/// One primary ray per pixel, recursive transparency, temporal accumulation
pub mod intersect;
pub mod renderer;
pub mod sampler;

pub use framebuffer::{blend, pack_rgb, AccumulationBuffer};
pub use intersect::{intersect_box, BoxHit};
pub use renderer::Renderer;
pub use sampler::{Sampler, MAX_RAY_DEPTH};
