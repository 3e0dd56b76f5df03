// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Animation state for a moving `c`.  The renderer itself is
//! stateless; whoever drives an animation owns one of these and asks
//! it for the next parameter on every tick.

use num::Complex;

use config::BOUNDS;
use error::{Error, Result};

/// Sweeps the real part of `c` back and forth across a range, the
/// way a slider driven by a timer would, reversing direction at
/// either end.  The imaginary part is held fixed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sweep {
    c: Complex<f64>,
    step: f64,
    lo: f64,
    hi: f64,
}

impl Sweep {
    /// Start at `c`, moving the real part by `step` per tick.  A
    /// negative step starts the sweep moving left.
    pub fn new(c: Complex<f64>, step: f64) -> Result<Sweep> {
        if !step.is_finite() {
            return Err(Error::invalid(format!("sweep step must be finite, got {}", step)));
        }
        Ok(Sweep {
            c,
            step,
            lo: BOUNDS.0,
            hi: BOUNDS.1,
        })
    }

    /// Confine the real part to `[lo, hi]` instead of the default slider
    /// range.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Result<Sweep> {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(Error::invalid(format!("bad sweep range [{}, {}]", lo, hi)));
        }
        self.lo = lo;
        self.hi = hi;
        Ok(self)
    }

    /// The parameter for the current frame.
    pub fn current(&self) -> Complex<f64> {
        self.c
    }

    /// The signed step; its sign is the current direction.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Advance one tick and return the new parameter.
    pub fn tick(&mut self) -> Complex<f64> {
        let re = self.c.re + self.step;
        if re >= self.hi {
            self.c.re = self.hi;
            self.step = -self.step;
        } else if re <= self.lo {
            self.c.re = self.lo;
            self.step = -self.step;
        } else {
            self.c.re = re;
        }
        self.c
    }
}

/// Yields the current parameter, then advances.  Never ends.
impl Iterator for Sweep {
    type Item = Complex<f64>;

    fn next(&mut self) -> Option<Complex<f64>> {
        let c = self.c;
        self.tick();
        Some(c)
    }
}
