/// Ray / axis-aligned box intersection via the slab method.
use glam::Vec3;

/// Near and far parametric crossings of a ray through a box.
/// `t_near` is negative when the ray origin lies inside the box; callers
/// that need the surface actually ahead of them fall back to `t_far`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxHit {
    pub t_near: f32,
    pub t_far: f32,
}

/// Slab test against the box spanning `min..max`.
///
/// Zero direction components divide to signed infinity, so an
/// axis-parallel ray never excludes the box on that axis as long as the
/// origin sits between the slabs. The NaN a 0 * inf product can produce
/// (origin exactly on a slab plane, parallel ray) falls out of the
/// componentwise min/max and resolves to a miss instead of poisoning the
/// other axes.
#[inline]
pub fn intersect_box(min: Vec3, max: Vec3, origin: Vec3, dir: Vec3) -> Option<BoxHit> {
    let inv = dir.recip();
    let lo = (min - origin) * inv;
    let hi = (max - origin) * inv;

    // Order the candidates per axis, then narrow the running interval.
    let t_near = lo.min(hi).max_element();
    let t_far = lo.max(hi).min_element();

    if t_far >= t_near.max(0.0) {
        Some(BoxHit { t_near, t_far })
    } else {
        None
    }
}
