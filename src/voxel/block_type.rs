/// Block material definitions and the id-indexed palette.
/// Materials are immutable after construction and shared by every cell
/// carrying the same id, so the whole table can be read concurrently
/// from the pixel loop without synchronization.
use glam::Vec3;

/// Id of the non-solid air entry. Every palette reserves slot 0 for it.
pub const AIR: u8 = 0;

/// Optical properties for one block type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockMaterial {
    /// Base surface color, each channel in [0, 1].
    pub surface_color: Vec3,
    /// Emitted light added on top of the shaded surface, unclamped.
    pub emission_color: Vec3,
    /// Fraction of the ray that continues past the surface, in [0, 1].
    pub transparency: f32,
    /// Stored with the rest of the material data; shading does not read it yet.
    pub reflection: f32,
    /// Whether the type occupies space for intersection purposes.
    pub solid: bool,
}

impl BlockMaterial {
    /// The non-solid, colorless entry used for air.
    pub const fn air() -> Self {
        Self {
            surface_color: Vec3::ZERO,
            emission_color: Vec3::ZERO,
            transparency: 0.0,
            reflection: 0.0,
            solid: false,
        }
    }

    /// Solid entry with the given surface color.
    pub const fn solid(surface_color: Vec3, transparency: f32, reflection: f32) -> Self {
        Self {
            surface_color,
            emission_color: Vec3::ZERO,
            transparency,
            reflection,
            solid: true,
        }
    }

    /// Opaque solid entry that also emits light.
    pub const fn emissive(surface_color: Vec3, emission_color: Vec3) -> Self {
        Self {
            surface_color,
            emission_color,
            transparency: 0.0,
            reflection: 0.0,
            solid: true,
        }
    }
}

/// Fixed ordered table of materials indexed by block id.
/// Loaded once at startup, never mutated while rendering.
#[derive(Clone, Debug)]
pub struct BlockPalette {
    materials: Vec<BlockMaterial>,
}

impl BlockPalette {
    pub fn new(materials: Vec<BlockMaterial>) -> Self {
        Self { materials }
    }

    /// Number of entries. Grid scatter draws ids in [0, len).
    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Material for `id`. Ids must be in range; the grid invariant
    /// guarantees this for every cell it hands out.
    #[inline]
    pub fn get(&self, id: u8) -> &BlockMaterial {
        debug_assert!((id as usize) < self.materials.len());
        &self.materials[id as usize]
    }

    /// True if `id` indexes an entry of this table.
    #[inline]
    pub fn contains(&self, id: u8) -> bool {
        (id as usize) < self.materials.len()
    }
}

impl Default for BlockPalette {
    /// Air plus three tinted translucent solids.
    fn default() -> Self {
        Self::new(vec![
            BlockMaterial::air(),
            BlockMaterial::solid(Vec3::new(1.0, 1.0, 0.0), 0.7, 0.1),
            BlockMaterial::solid(Vec3::new(0.0, 1.0, 1.0), 0.7, 0.1),
            BlockMaterial::solid(Vec3::new(1.0, 0.0, 1.0), 0.7, 0.1),
        ])
    }
}
