#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set belongs to a fixed complex parameter `c`.  Take any
//! point `z` on the complex plane and repeatedly replace it with
//! `z² + c`.  Some points run off to infinity, some stay bounded
//! forever; the Julia set is the boundary between the two.
//!
//! The escape-time picture colours each point by how many iterations
//! it survives before its magnitude passes an escape radius (past a
//! radius of 2 a point can never come back).  Points that survive up
//! to the iteration cap are treated as being in, or very near, the
//! set.
//!
//! Every point is independent of every other, so the grid is
//! rendered row by row across all available cores.  The renderer is
//! stateless: build an [`EscapeTimeGrid`] once, then call it with a
//! new `c` as often as the caller likes.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

#[cfg(test)]
extern crate tempfile;

pub mod axis;
pub mod config;
pub mod error;
pub mod escape;
pub mod grid;
pub mod image_out;
pub mod palette;
pub mod sweep;

pub use axis::Axis;
pub use config::Config;
pub use error::{Error, Result};
pub use escape::{compute, escape_time, EscapeTimeGrid};
pub use grid::IterationGrid;
pub use palette::Palette;
pub use sweep::Sweep;
