// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Startup configuration.  Everything here is fixed for the lifetime
//! of a session; only `c` changes after the grid is built, and that is
//! the caller's to own.

use num::Complex;

use axis::Axis;
use error::Result;
use escape::EscapeTimeGrid;

/// Default grid side.
pub const DIM: usize = 800;
/// Default iteration cap.
pub const MAX_ITER: u32 = 80;
/// Default escape radius.
pub const ESCAPE_RADIUS: f64 = 2.0;
/// Default sample interval, used for both axes.
pub const BOUNDS: (f64, f64) = (-1.5, 1.5);
/// A visually interesting starting parameter.
pub const INITIAL_C: (f64, f64) = (-0.7, 0.27015);

/// The parameters needed to build an `EscapeTimeGrid`, plus the
/// initial `c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Samples per axis; the grid is `dim × dim`.
    pub dim: usize,
    /// Interval sampled along the real (x) axis.
    pub x_bounds: (f64, f64),
    /// Interval sampled along the imaginary (y) axis.
    pub y_bounds: (f64, f64),
    /// Iteration cap.
    pub max_iter: u32,
    /// Escape radius.
    pub escape_radius: f64,
    /// The parameter for the first frame.
    pub c: Complex<f64>,
    /// Worker threads for the renderer.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dim: DIM,
            x_bounds: BOUNDS,
            y_bounds: BOUNDS,
            max_iter: MAX_ITER,
            escape_radius: ESCAPE_RADIUS,
            c: Complex::new(INITIAL_C.0, INITIAL_C.1),
            threads: num_cpus::get().max(1),
        }
    }
}

impl Config {
    /// Build the axes and the grid.  Any invalid setting surfaces here,
    /// before the first frame is rendered.
    pub fn escape_time_grid(&self) -> Result<EscapeTimeGrid> {
        let x_axis = Axis::linspace(self.x_bounds.0, self.x_bounds.1, self.dim)?;
        let y_axis = Axis::linspace(self.y_bounds.0, self.y_bounds.1, self.dim)?;
        EscapeTimeGrid::new(x_axis, y_axis, self.max_iter, self.escape_radius)?
            .with_threads(self.threads)
    }
}
