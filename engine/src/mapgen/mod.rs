//! Procedural map generation.
//!
//! Produces a symmetric, fully-connected starting grid from a seed: random
//! fill, cellular-automaton smoothing, inversion, 180°-symmetry enforcement,
//! headquarters clearings, and corridor-based connectivity repair. All
//! randomness comes from one seeded generator drawn in a fixed order, so the
//! same seed always yields the same map.

pub mod components;
pub mod linker;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::GenParams;
use crate::grid::{Grid, Owner};

/// Side length of the passable block reserved around each headquarters.
const HQ_CLEARING: usize = 3;

/// Generates terrain into `grid`, leaving every cell `Void` or `Neutral`
/// and the adjacency table rebuilt.
pub fn generate(grid: &mut Grid, seed: u64, params: &GenParams) {
    let mut rng = SmallRng::seed_from_u64(seed);

    random_fill(grid, &mut rng, params.land_chance);

    // The origin corner is reserved for a headquarters.
    force_block(grid, 2);

    for _ in 0..params.automaton_iterations {
        smooth(grid, params.smooth_threshold);
    }

    invert(grid);
    enforce_symmetry(grid);
    force_block(grid, HQ_CLEARING);

    linker::link_components(grid, &mut rng);
    grid.compute_neighbours();
}

/// Fills every cell independently: passable with probability `land_chance`.
fn random_fill(grid: &mut Grid, rng: &mut SmallRng, land_chance: f32) {
    for (x, y) in grid.coords().collect::<Vec<_>>() {
        let owner = if rng.gen::<f32>() < land_chance {
            Owner::Neutral
        } else {
            Owner::Void
        };
        grid.set_owner(x, y, owner);
    }
}

/// One cellular-automaton pass over a full snapshot of the grid.
///
/// A cell stays passable when at least `threshold` of its 8 surrounding
/// cells are passable; out-of-bounds counts as passable. Reading from the
/// snapshot and writing to the live grid keeps iterations feedback-free.
fn smooth(grid: &mut Grid, threshold: u32) {
    let (w, h) = (grid.width(), grid.height());
    let snapshot: Vec<Owner> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| grid.owner(x, y))
        .collect();

    let passable_at = |x: isize, y: isize| -> bool {
        if x < 0 || x >= w as isize || y < 0 || y >= h as isize {
            return true;
        }
        snapshot[y as usize * w + x as usize].is_passable()
    };

    for (x, y) in grid.coords().collect::<Vec<_>>() {
        let mut count = 0;
        for dx in -1..=1isize {
            for dy in -1..=1isize {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if passable_at(x as isize + dx, y as isize + dy) {
                    count += 1;
                }
            }
        }
        let owner = if count >= threshold {
            Owner::Neutral
        } else {
            Owner::Void
        };
        grid.set_owner(x, y, owner);
    }
}

/// Swaps passable and impassable terrain grid-wide. The automaton favours
/// cave-like sparse passable regions; inverting yields open maps with
/// sparse obstacles.
fn invert(grid: &mut Grid) {
    for (x, y) in grid.coords().collect::<Vec<_>>() {
        let owner = match grid.owner(x, y) {
            Owner::Void => Owner::Neutral,
            Owner::Neutral => Owner::Void,
            other => other,
        };
        grid.set_owner(x, y, owner);
    }
}

/// Copies the upper-left triangular half (inclusive of the diagonal) onto
/// its 180°-rotated mirror, guaranteeing point symmetry.
fn enforce_symmetry(grid: &mut Grid) {
    let h = grid.height();
    for x in 0..grid.width() {
        for y in 0..(x + 1).min(h) {
            let owner = grid.owner(x, y);
            let (mx, my) = grid.symmetric(x, y);
            grid.set_owner(mx, my, owner);
        }
    }
}

/// Forces a `size`×`size` passable block at the origin corner and its mirror.
fn force_block(grid: &mut Grid, size: usize) {
    let size = size.min(grid.width()).min(grid.height());
    for x in 0..size {
        for y in 0..size {
            grid.set_owner(x, y, Owner::Neutral);
            let (mx, my) = grid.symmetric(x, y);
            grid.set_owner(mx, my, Owner::Neutral);
        }
    }
}
