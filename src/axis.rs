// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Axis struct, a run of evenly spaced samples along one
//! dimension of the complex plane.  Two axes, one for the real part
//! and one for the imaginary part, define the sample grid that the
//! escape-time computation walks.

use std::ops::Index;
use std::slice;

use error::{Error, Result};

/// An ordered sequence of `len` evenly spaced samples over the closed
/// interval `[lo, hi]`.  The first sample is exactly `lo` and the last
/// is exactly `hi`, so the endpoints never drift with rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    lo: f64,
    hi: f64,
    samples: Vec<f64>,
}

impl Axis {
    /// Constructor.  Rejects empty axes, non-finite bounds, and bounds
    /// that are the wrong way round.
    pub fn linspace(lo: f64, hi: f64, len: usize) -> Result<Axis> {
        if len == 0 {
            return Err(Error::invalid("an axis needs at least one sample"));
        }

        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::invalid(format!(
                "axis bounds must be finite, got [{}, {}]",
                lo, hi
            )));
        }

        if hi < lo {
            return Err(Error::invalid(format!(
                "the lower bound {} is above the upper bound {}",
                lo, hi
            )));
        }

        let samples = if len == 1 {
            vec![lo]
        } else {
            let step = (hi - lo) / ((len - 1) as f64);
            (0..len)
                .map(|k| if k == len - 1 { hi } else { lo + (k as f64) * step })
                .collect()
        };

        Ok(Axis { lo, hi, samples })
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a constructed axis.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The lower bound of the interval.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// The upper bound of the interval.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// The samples, in ascending order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> slice::Iter<f64> {
        self.samples.iter()
    }

    /// Given a coordinate along this axis, return the index of the
    /// sample closest to it.  Coordinates outside the interval clamp
    /// to the nearest end.
    pub fn nearest(&self, value: f64) -> usize {
        let last = self.samples.len() - 1;
        if last == 0 || value <= self.lo {
            return 0;
        }
        if value >= self.hi {
            return last;
        }
        let step = (self.hi - self.lo) / (last as f64);
        let k = ((value - self.lo) / step).round() as usize;
        if k > last {
            last
        } else {
            k
        }
    }
}

impl Index<usize> for Axis {
    type Output = f64;

    fn index(&self, k: usize) -> &f64 {
        &self.samples[k]
    }
}

impl<'a> IntoIterator for &'a Axis {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_fails_on_empty() {
        assert!(Axis::linspace(-1.5, 1.5, 0).is_err());
    }

    #[test]
    fn axis_fails_on_inverted_bounds() {
        let axis = Axis::linspace(1.0, -1.0, 4);
        assert!(axis.unwrap_err().is_invalid_input());
    }

    #[test]
    fn axis_fails_on_nan_bounds() {
        assert!(Axis::linspace(::std::f64::NAN, 1.0, 4).is_err());
        assert!(Axis::linspace(-1.0, ::std::f64::INFINITY, 4).is_err());
    }

    #[test]
    fn axis_hits_both_endpoints() {
        let axis = Axis::linspace(-1.5, 1.5, 800).unwrap();
        assert_eq!(axis.len(), 800);
        assert_eq!(axis[0], -1.5);
        assert_eq!(axis[799], 1.5);
    }

    #[test]
    fn axis_is_evenly_spaced() {
        let axis = Axis::linspace(-1.5, 1.5, 5).unwrap();
        assert_eq!(axis.as_slice(), &[-1.5, -0.75, 0.0, 0.75, 1.5]);
    }

    #[test]
    fn single_sample_axis_sits_on_lower_bound() {
        let axis = Axis::linspace(-2.0, 2.0, 1).unwrap();
        assert_eq!(axis.as_slice(), &[-2.0]);
        assert_eq!(axis.nearest(1.9), 0);
    }

    #[test]
    fn degenerate_interval_is_allowed() {
        let axis = Axis::linspace(0.5, 0.5, 3).unwrap();
        assert!(axis.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn nearest_finds_the_middle() {
        let axis = Axis::linspace(-1.5, 1.5, 101).unwrap();
        assert_eq!(axis.nearest(0.0), 50);
        assert_eq!(axis[50], 0.0);
    }

    #[test]
    fn nearest_on_even_axis_picks_a_neighbor_of_zero() {
        let axis = Axis::linspace(-1.5, 1.5, 800).unwrap();
        let k = axis.nearest(0.0);
        assert!(k == 399 || k == 400);
        assert!(axis[k].abs() < 0.002);
    }

    #[test]
    fn nearest_clamps_outside_the_interval() {
        let axis = Axis::linspace(-2.0, 2.0, 9).unwrap();
        assert_eq!(axis.nearest(-10.0), 0);
        assert_eq!(axis.nearest(10.0), 8);
        assert_eq!(axis.nearest(1.0), 6);
    }
}
