/// Tests for the recursive per-ray color evaluation.
use blocktracer::{BlockMaterial, BlockPalette, Sampler, VoxelGrid, MAX_RAY_DEPTH};
use glam::Vec3;

const SKY: Vec3 = Vec3::new(0.6, 0.6, 1.0);

fn opaque_palette() -> BlockPalette {
    BlockPalette::new(vec![
        BlockMaterial::air(),
        BlockMaterial::solid(Vec3::new(1.0, 0.0, 0.0), 0.0, 0.0),
        BlockMaterial::solid(Vec3::new(0.0, 1.0, 0.0), 0.0, 0.0),
    ])
}

#[test]
fn test_all_air_grid_returns_sky_for_any_ray() {
    let grid = VoxelGrid::new(8, 8, 8);
    let palette = opaque_palette();
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    let dirs = [
        Vec3::Z,
        Vec3::NEG_Z,
        Vec3::Y,
        Vec3::new(0.3, -0.5, 0.8).normalize(),
    ];
    for dir in dirs {
        assert_eq!(sampler.sample(Vec3::new(4.0, 4.0, -10.0), dir, 0), SKY);
    }
}

#[test]
fn test_opaque_block_returns_its_surface_color() {
    let mut grid = VoxelGrid::new(8, 8, 8);
    grid.set(3, 3, 3, 1);
    let palette = opaque_palette();
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    // Aimed straight at the block center from outside the grid.
    let color = sampler.sample(Vec3::new(3.5, 3.5, -5.0), Vec3::Z, 0);
    assert_eq!(color, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_emission_is_added_on_top_of_surface() {
    let surface = Vec3::new(0.2, 0.2, 0.2);
    let emission = Vec3::new(1.5, 0.0, 0.0);
    let palette = BlockPalette::new(vec![
        BlockMaterial::air(),
        BlockMaterial::emissive(surface, emission),
    ]);

    let mut grid = VoxelGrid::new(4, 4, 4);
    grid.set(1, 1, 1, 1);
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    let color = sampler.sample(Vec3::new(1.5, 1.5, -3.0), Vec3::Z, 0);
    // Unclamped at this stage; the red channel exceeds 1.
    assert_eq!(color, surface + emission);
}

#[test]
fn test_zero_transparency_collapses_to_surface_color() {
    // Opaque front block with different-colored blocks stacked behind it;
    // the result must be the front surface color alone, no recursion.
    let mut grid = VoxelGrid::new(1, 1, 8);
    grid.set(0, 0, 0, 1);
    for z in 1..8 {
        grid.set(0, 0, z, 2);
    }
    let palette = opaque_palette();
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    let color = sampler.sample(Vec3::new(0.5, 0.5, -2.0), Vec3::Z, 0);
    assert_eq!(
        color,
        Vec3::new(1.0, 0.0, 0.0),
        "occluded cells must not leak through an opaque surface"
    );
}

#[test]
fn test_nearest_hit_wins_regardless_of_scan_position() {
    // The cell scanned first lies farther along the ray; distance, not
    // scan order, must pick the visible surface.
    let mut grid = VoxelGrid::new(1, 1, 8);
    grid.set(0, 0, 1, 1); // scanned first, farther from this ray
    grid.set(0, 0, 3, 2); // scanned later, nearer

    let palette = opaque_palette();
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    let color = sampler.sample(Vec3::new(0.5, 0.5, 10.0), Vec3::NEG_Z, 0);
    assert_eq!(color, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_non_solid_entries_are_skipped() {
    // A palette entry can be non-solid without being air; rays pass
    // through as if the cell were empty.
    let ghost = BlockMaterial {
        surface_color: Vec3::ONE,
        emission_color: Vec3::ZERO,
        transparency: 0.0,
        reflection: 0.0,
        solid: false,
    };
    let palette = BlockPalette::new(vec![BlockMaterial::air(), ghost]);

    let mut grid = VoxelGrid::new(2, 2, 2);
    grid.set(0, 0, 0, 1);
    let sampler = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    assert_eq!(sampler.sample(Vec3::new(0.5, 0.5, -2.0), Vec3::Z, 0), SKY);
}

#[test]
fn test_depth_cap_bounds_the_visible_geometry() {
    // Two glass corridors identical up to the recursion horizon and
    // different far beyond it. Each recursion step advances the ray by at
    // most one face crossing, so with a cap of MAX_RAY_DEPTH the far
    // cells are unreachable and the traces must agree bit for bit.
    let palette = BlockPalette::new(vec![
        BlockMaterial::air(),
        BlockMaterial::solid(Vec3::new(1.0, 1.0, 0.0), 0.7, 0.1),
        BlockMaterial::solid(Vec3::new(1.0, 0.0, 1.0), 0.7, 0.1),
    ]);

    let mut uniform = VoxelGrid::new(1, 1, 16);
    let mut tinted_far = VoxelGrid::new(1, 1, 16);
    for z in 0..16 {
        uniform.set(0, 0, z, 1);
        tinted_far.set(0, 0, z, 1);
    }
    tinted_far.set(0, 0, 12, 2);
    tinted_far.set(0, 0, 13, 2);

    let a = Sampler::new(&uniform, &palette, SKY, MAX_RAY_DEPTH);
    let b = Sampler::new(&tinted_far, &palette, SKY, MAX_RAY_DEPTH);

    let origin = Vec3::new(0.5, 0.5, -2.0);
    assert_eq!(
        a.sample(origin, Vec3::Z, 0),
        b.sample(origin, Vec3::Z, 0),
        "cells beyond the recursion horizon must not influence the result"
    );
}

#[test]
fn test_depth_cap_zero_treats_glass_as_opaque() {
    let palette = BlockPalette::new(vec![
        BlockMaterial::air(),
        BlockMaterial::solid(Vec3::new(1.0, 1.0, 0.0), 0.7, 0.1),
    ]);

    let mut grid = VoxelGrid::new(1, 1, 4);
    grid.set(0, 0, 1, 1);

    // Primary rays already sit at the cap, so the translucent surface
    // renders as plain surface color and nothing behind it contributes.
    let shallow = Sampler::new(&grid, &palette, SKY, 0);
    let color = shallow.sample(Vec3::new(0.5, 0.5, -1.0), Vec3::Z, 0);
    assert_eq!(color, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_deeper_caps_change_translucent_results() {
    // Sanity check that the cap is actually consulted. Emission is added
    // at every recursion level, so a glowing glass block traced with a
    // deeper cap accumulates strictly more light than one cut off at the
    // primary ray.
    let glowing_glass = BlockMaterial {
        surface_color: Vec3::new(1.0, 1.0, 0.0),
        emission_color: Vec3::new(0.0, 0.0, 0.5),
        transparency: 0.7,
        reflection: 0.1,
        solid: true,
    };
    let palette = BlockPalette::new(vec![BlockMaterial::air(), glowing_glass]);

    let mut grid = VoxelGrid::new(1, 1, 8);
    grid.set(0, 0, 2, 1);

    let capped = Sampler::new(&grid, &palette, SKY, 0);
    let deep = Sampler::new(&grid, &palette, SKY, MAX_RAY_DEPTH);

    let origin = Vec3::new(0.5, 0.5, 0.0);
    let shallow_color = capped.sample(origin, Vec3::Z, 0);
    let deep_color = deep.sample(origin, Vec3::Z, 0);

    assert_eq!(shallow_color, Vec3::new(1.0, 1.0, 0.5));
    assert!(
        deep_color.z > shallow_color.z,
        "recursing through glowing glass must pick up extra emission ({} > {})",
        deep_color.z,
        shallow_color.z
    );
}
