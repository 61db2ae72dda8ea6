//! Connected-component discovery.
//!
//! Partitions the passable cells of a grid into maximal 4-connected regions.
//! Uses an explicit stack rather than recursion so large grids cannot
//! overflow the call stack.

use crate::grid::{Grid, ALL_DIRECTIONS};

/// Returns the connected components of passable terrain.
///
/// Components are discovered in row-major order of their first cell;
/// membership order within a component is unspecified.
pub fn connected_components(grid: &Grid) -> Vec<Vec<(usize, usize)>> {
    let (w, h) = (grid.width(), grid.height());
    let mut visited = vec![false; w * h];
    let mut components = Vec::new();

    for (x, y) in grid.coords() {
        if visited[y * w + x] || !grid.owner(x, y).is_passable() {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![(x, y)];
        visited[y * w + x] = true;

        while let Some((cx, cy)) = stack.pop() {
            component.push((cx, cy));
            for dir in ALL_DIRECTIONS {
                let (dx, dy) = dir.offset();
                let (nx, ny) = (cx as isize + dx, cy as isize + dy);
                if !grid.is_inside(nx, ny) {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !visited[ny * w + nx] {
                    visited[ny * w + nx] = true;
                    stack.push((nx, ny));
                }
            }
        }

        components.push(component);
    }

    components
}
