//! The grid arena.
//!
//! Cells live in a single flat vector indexed by `y * width + x`; all other
//! components reference cells by coordinate only. The adjacency table is
//! recomputed after map generation and excludes impassable cells.

use super::cell::{Cell, Owner, ALL_DIRECTIONS};

/// Default playable map width.
pub const MAP_WIDTH: usize = 12;

/// Default playable map height.
pub const MAP_HEIGHT: usize = 12;

/// A fixed-size 2D grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell impassable.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.idx(x, y)]
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.idx(x, y);
        &mut self.cells[idx]
    }

    pub fn owner(&self, x: usize, y: usize) -> Owner {
        self.cell(x, y).owner
    }

    pub fn set_owner(&mut self, x: usize, y: usize, owner: Owner) {
        self.cell_mut(x, y).owner = owner;
    }

    /// Returns true if the signed coordinates fall inside the rectangle.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Returns true if the coordinates name a passable cell.
    pub fn is_inside(&self, x: isize, y: isize) -> bool {
        self.in_bounds(x, y) && self.owner(x as usize, y as usize).is_passable()
    }

    /// Returns the 180°-rotated mirror coordinates of (x, y).
    pub fn symmetric(&self, x: usize, y: usize) -> (usize, usize) {
        (self.width - 1 - x, self.height - 1 - y)
    }

    /// Iterates all coordinates in column-major order (x outer, y inner),
    /// matching the fixed order the map generator draws randomness in.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |x| (0..h).map(move |y| (x, y)))
    }

    /// Rebuilds the 4-directional adjacency table.
    ///
    /// A cell links to a neighbour only when that neighbour is passable;
    /// impassable cells keep no links and are never linked to.
    pub fn compute_neighbours(&mut self) {
        for (x, y) in self.coords().collect::<Vec<_>>() {
            let mut links = [None; 4];
            if self.owner(x, y).is_passable() {
                for dir in ALL_DIRECTIONS {
                    let (dx, dy) = dir.offset();
                    let (nx, ny) = (x as isize + dx, y as isize + dy);
                    if self.is_inside(nx, ny) {
                        links[dir as usize] = Some((nx as usize, ny as usize));
                    }
                }
            }
            self.cell_mut(x, y).neighbours = links;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(w: usize, h: usize) -> Grid {
        let mut grid = Grid::new(w, h);
        for (x, y) in grid.coords().collect::<Vec<_>>() {
            grid.set_owner(x, y, Owner::Neutral);
        }
        grid
    }

    #[test]
    fn new_grid_is_all_void() {
        let grid = Grid::new(4, 3);
        assert!(grid.coords().all(|(x, y)| grid.owner(x, y) == Owner::Void));
    }

    #[test]
    fn symmetric_maps_corners_onto_each_other() {
        let grid = Grid::new(12, 12);
        assert_eq!(grid.symmetric(0, 0), (11, 11));
        assert_eq!(grid.symmetric(11, 11), (0, 0));
        assert_eq!(grid.symmetric(3, 5), (8, 6));
    }

    #[test]
    fn neighbours_link_passable_cells() {
        let mut grid = open_grid(3, 3);
        grid.compute_neighbours();
        let centre = grid.cell(1, 1);
        assert_eq!(centre.neighbours[0], Some((1, 0)));
        assert_eq!(centre.neighbours[1], Some((2, 1)));
        assert_eq!(centre.neighbours[2], Some((1, 2)));
        assert_eq!(centre.neighbours[3], Some((0, 1)));
    }

    #[test]
    fn neighbours_exclude_void_cells() {
        let mut grid = open_grid(3, 3);
        grid.set_owner(1, 0, Owner::Void);
        grid.compute_neighbours();
        assert_eq!(grid.cell(1, 1).neighbours[0], None);
        assert!(grid.cell(1, 0).neighbours.iter().all(|n| n.is_none()));
    }

    #[test]
    fn border_cells_have_no_out_of_bounds_links() {
        let mut grid = open_grid(2, 2);
        grid.compute_neighbours();
        let corner = grid.cell(0, 0);
        assert_eq!(corner.neighbours[0], None);
        assert_eq!(corner.neighbours[3], None);
        assert_eq!(corner.neighbours[1], Some((1, 0)));
        assert_eq!(corner.neighbours[2], Some((0, 1)));
    }
}
