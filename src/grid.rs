// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output of the escape-time computation: a square matrix of
//! iteration counts, stored row-major in one contiguous buffer so the
//! workers can carve it into disjoint row slices.

use std::ops::Index;
use std::slice;

/// A `dim × dim` matrix of iteration counts.  The row index follows
/// the imaginary (y) axis and the column index follows the real (x)
/// axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationGrid {
    dim: usize,
    cells: Vec<u32>,
}

impl IterationGrid {
    /// A zeroed grid, ready to be handed to `compute_into`.
    pub fn new(dim: usize) -> IterationGrid {
        IterationGrid {
            dim,
            cells: vec![0 as u32; dim * dim],
        }
    }

    /// The length of one side of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a zero-sized grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The count stored at `row`, `col`, if that cell exists.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.dim && col < self.dim {
            Some(self.cells[row * self.dim + col])
        } else {
            None
        }
    }

    /// One row of the grid, left to right along the x-axis.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.dim..(row + 1) * self.dim]
    }

    /// Iterate over the rows, top (first y sample) to bottom.
    pub fn rows(&self) -> slice::Chunks<u32> {
        self.cells.chunks(self.dim.max(1))
    }

    /// The whole grid as a flat row-major slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    /// Consume the grid, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<u32> {
        self.cells
    }

    /// The largest count in the grid.
    pub fn max(&self) -> u32 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }

    /// The mean count over the whole grid.
    pub fn mean(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let total: u64 = self.cells.iter().map(|&v| u64::from(v)).sum();
        total as f64 / self.cells.len() as f64
    }
}

impl Index<(usize, usize)> for IterationGrid {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        assert!(col < self.dim, "column {} out of range", col);
        &self.cells[row * self.dim + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IterationGrid {
        let mut grid = IterationGrid::new(3);
        for (i, cell) in grid.as_mut_slice().iter_mut().enumerate() {
            *cell = i as u32;
        }
        grid
    }

    #[test]
    fn new_grid_is_zeroed() {
        let grid = IterationGrid::new(4);
        assert_eq!(grid.len(), 16);
        assert!(grid.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn cells_are_row_major() {
        let grid = sample();
        assert_eq!(grid.get(0, 2), Some(2));
        assert_eq!(grid.get(2, 0), Some(6));
        assert_eq!(grid[(1, 1)], 4);
        assert_eq!(grid.row(1), &[3, 4, 5]);
    }

    #[test]
    fn get_outside_the_grid_is_none() {
        let grid = sample();
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn index_past_the_row_panics() {
        let grid = sample();
        let _ = grid[(0, 3)];
    }

    #[test]
    fn rows_walk_top_to_bottom() {
        let grid = sample();
        let rows: Vec<&[u32]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[6, 7, 8]);
    }

    #[test]
    fn summaries() {
        let grid = sample();
        assert_eq!(grid.max(), 8);
        assert_eq!(grid.mean(), 4.0);
        assert_eq!(grid.into_vec().len(), 9);
    }
}
