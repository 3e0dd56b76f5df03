// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time computation.  Every point of the sample grid is
//! seeded into `z`, and `z = z² + c` is applied until the point
//! leaves the disc of the escape radius or the iteration cap is
//! reached.  The number of iterations survived is the value stored
//! for that point.
//!
//! Boundary convention: the magnitude test happens *before* each
//! iteration and is strict, so a seed whose magnitude is already at
//! or past the escape radius is stored as 0.

use itertools::iproduct;
use num::Complex;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use axis::Axis;
use error::{Error, Result};
use grid::IterationGrid;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u32>>>>;

/// This is our classic iterator function: it returns the number of
/// iterations `z0` survives under `z = z² + c` before its squared
/// magnitude reaches `escape_radius_sq`, or `max_iter` if it never
/// does.  Comparing squared magnitudes saves a square root per step.
#[inline]
pub fn escape_time(
    z0: Complex<f64>,
    c: Complex<f64>,
    max_iter: u32,
    escape_radius_sq: f64,
) -> u32 {
    let mut z = z0;
    let mut count = 0;
    while z.norm_sqr() < escape_radius_sq && count < max_iter {
        z = z * z + c;
        count += 1;
    }
    count
}

/// Computes the escape-time grid for one value of `c`.  Validates its
/// inputs, then renders in parallel on every available core.
pub fn compute(
    x_axis: &Axis,
    y_axis: &Axis,
    c: Complex<f64>,
    max_iter: u32,
    escape_radius: f64,
) -> Result<IterationGrid> {
    EscapeTimeGrid::new(x_axis.clone(), y_axis.clone(), max_iter, escape_radius)?.compute(c)
}

/// The sample grid and the fixed configuration of the computation.
/// Built once per session; after that the only thing that varies
/// between calls is `c`.  Holds no mutable state, so a single value
/// can be shared freely.
#[derive(Clone, Debug)]
pub struct EscapeTimeGrid {
    x_axis: Axis,
    y_axis: Axis,
    max_iter: u32,
    escape_radius: f64,
    escape_radius_sq: f64,
    threads: usize,
}

impl EscapeTimeGrid {
    /// Requires the two axes of the sample grid (real part along x,
    /// imaginary part along y), the iteration cap, and the escape
    /// radius.  The axes must be the same, non-zero, length.  The
    /// worker count defaults to the number of CPUs.
    pub fn new(x_axis: Axis, y_axis: Axis, max_iter: u32, escape_radius: f64) -> Result<Self> {
        if x_axis.len() != y_axis.len() {
            return Err(Error::invalid(format!(
                "axis lengths differ: x has {} samples, y has {}",
                x_axis.len(),
                y_axis.len()
            )));
        }

        if x_axis.is_empty() {
            return Err(Error::invalid("the grid dimension must be positive"));
        }

        if max_iter == 0 {
            return Err(Error::invalid("max_iter must be at least 1"));
        }

        if !(escape_radius > 0.0 && escape_radius.is_finite()) {
            return Err(Error::invalid(format!(
                "escape radius must be positive and finite, got {}",
                escape_radius
            )));
        }

        Ok(EscapeTimeGrid {
            x_axis,
            y_axis,
            max_iter,
            escape_radius,
            escape_radius_sq: escape_radius * escape_radius,
            threads: num_cpus::get().max(1),
        })
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::invalid("at least one worker thread is required"));
        }
        self.threads = threads;
        Ok(self)
    }

    /// The length of one side of the grid.
    pub fn dim(&self) -> usize {
        self.x_axis.len()
    }

    /// Samples of the real part, one per column.
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// Samples of the imaginary part, one per row.
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// The iteration cap, and the value stored for points that never
    /// escape.
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// The escape radius.
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    /// The number of worker threads.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Render a fresh grid for `c`.
    pub fn compute(&self, c: Complex<f64>) -> Result<IterationGrid> {
        let mut grid = IterationGrid::new(self.dim());
        self.compute_into(c, &mut grid)?;
        Ok(grid)
    }

    /// Render into a grid the caller already owns, overwriting every
    /// cell.  Lets an animation loop reuse one buffer across frames.
    ///
    /// Workers pull rows from a shared queue rather than taking a fixed
    /// band each, since rows near the boundary of the set cost far more
    /// than rows out in the escaping region.
    pub fn compute_into(&self, c: Complex<f64>, grid: &mut IterationGrid) -> Result<()> {
        let dim = self.dim();
        if grid.dim() != dim {
            return Err(Error::invalid(format!(
                "output grid is {0}x{0}, expected {1}x{1}",
                grid.dim(),
                dim
            )));
        }

        let workers = self.threads.min(dim);
        debug!(
            "rendering {}x{} grid for c = {} on {} worker(s)",
            dim, dim, c, workers
        );

        if workers == 1 {
            for (row, cells) in grid.as_mut_slice().chunks_mut(dim).enumerate() {
                self.render_row(row, cells, c);
            }
            return Ok(());
        }

        let rows: RowQueue = Arc::new(Mutex::new(
            grid.as_mut_slice().chunks_mut(dim).enumerate(),
        ));
        crossbeam::scope(|spawner| {
            for _ in 0..workers {
                let rows = rows.clone();
                spawner.spawn(move |_| loop {
                    let next = match rows.lock() {
                        Ok(mut queue) => queue.next(),
                        Err(_) => None,
                    };
                    match next {
                        Some((row, cells)) => self.render_row(row, cells, c),
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)
    }

    /// The single-threaded reference renderer.  Walks the grid cell by
    /// cell with no partitioning at all; the parallel renderer must
    /// agree with it bit for bit.
    pub fn compute_single(&self, c: Complex<f64>) -> Result<IterationGrid> {
        let dim = self.dim();
        let mut grid = IterationGrid::new(dim);
        {
            let cells = grid.as_mut_slice();
            for (row, col) in iproduct!(0..dim, 0..dim) {
                let z0 = Complex::new(self.x_axis[col], self.y_axis[row]);
                cells[row * dim + col] = escape_time(z0, c, self.max_iter, self.escape_radius_sq);
            }
        }
        Ok(grid)
    }

    fn render_row(&self, row: usize, cells: &mut [u32], c: Complex<f64>) {
        let im = self.y_axis[row];
        for (cell, &re) in cells.iter_mut().zip(self.x_axis.iter()) {
            *cell = escape_time(Complex::new(re, im), c, self.max_iter, self.escape_radius_sq);
        }
    }
}
