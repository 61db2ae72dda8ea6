//! Connectivity repair.
//!
//! Merges disjoint passable regions into a single playable area by carving
//! axis-aligned corridors between one random representative per region. Every
//! carve is applied to the mirrored coordinates in lockstep so the map's
//! point symmetry survives the repair.

use rand::rngs::SmallRng;
use rand::Rng;

use super::components::connected_components;
use crate::grid::{Grid, Owner};

/// Carves corridors until the passable terrain forms a single component.
///
/// Representatives are linked pairwise, so the corridor graph is complete
/// and all regions merge transitively even when one corridor alone would
/// not join them.
pub fn link_components(grid: &mut Grid, rng: &mut SmallRng) {
    let components = connected_components(grid);
    if components.len() <= 1 {
        return;
    }

    let picks: Vec<(usize, usize)> = components
        .iter()
        .map(|component| component[rng.gen_range(0..component.len())])
        .collect();

    for i in 0..picks.len() {
        for j in (i + 1)..picks.len() {
            carve_corridor(grid, picks[i], picks[j]);
        }
    }
}

/// Carves an L-shaped corridor: a horizontal run at `b`'s row, then a
/// vertical run at `a`'s column, mirrored on both legs.
fn carve_corridor(grid: &mut Grid, a: (usize, usize), b: (usize, usize)) {
    let (start_x, end_x) = (a.0.min(b.0), a.0.max(b.0));
    let (start_y, end_y) = (a.1.min(b.1), a.1.max(b.1));

    for x in start_x..=end_x {
        carve(grid, x, b.1);
    }
    for y in start_y..=end_y {
        carve(grid, a.0, y);
    }
}

fn carve(grid: &mut Grid, x: usize, y: usize) {
    if grid.owner(x, y) == Owner::Void {
        grid.set_owner(x, y, Owner::Neutral);
    }
    let (mx, my) = grid.symmetric(x, y);
    if grid.owner(mx, my) == Owner::Void {
        grid.set_owner(mx, my, Owner::Neutral);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn split_grid() -> Grid {
        // Two open columns separated by a full-height wall.
        let mut grid = Grid::new(5, 5);
        for y in 0..5 {
            grid.set_owner(0, y, Owner::Neutral);
            grid.set_owner(4, y, Owner::Neutral);
        }
        grid
    }

    #[test]
    fn linking_merges_all_components() {
        let mut grid = split_grid();
        let mut rng = SmallRng::seed_from_u64(7);
        link_components(&mut grid, &mut rng);
        assert_eq!(connected_components(&grid).len(), 1);
    }

    #[test]
    fn linking_preserves_symmetry_of_symmetric_input() {
        let mut grid = split_grid();
        let mut rng = SmallRng::seed_from_u64(99);
        link_components(&mut grid, &mut rng);
        for (x, y) in grid.coords().collect::<Vec<_>>() {
            let (mx, my) = grid.symmetric(x, y);
            assert_eq!(grid.owner(x, y), grid.owner(mx, my), "asymmetry at ({}, {})", x, y);
        }
    }

    #[test]
    fn single_component_is_left_untouched() {
        let mut grid = Grid::new(3, 3);
        for (x, y) in grid.coords().collect::<Vec<_>>() {
            grid.set_owner(x, y, Owner::Neutral);
        }
        let before: Vec<Owner> = grid.coords().map(|(x, y)| grid.owner(x, y)).collect();
        let mut rng = SmallRng::seed_from_u64(1);
        link_components(&mut grid, &mut rng);
        let after: Vec<Owner> = grid.coords().map(|(x, y)| grid.owner(x, y)).collect();
        assert_eq!(before, after);
    }
}
