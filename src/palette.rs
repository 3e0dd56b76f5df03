// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named colour schemes for turning a grid of iteration counts into
//! pixels.  Each scheme is a short list of colour stops; values between
//! stops are interpolated linearly.  The stops approximate the
//! well-known plotting colormaps of the same names closely enough for
//! display, not for colour science.

use itertools::Itertools;

use error::{Error, Result};
use grid::IterationGrid;

type Stop = (f64, [u8; 3]);

/// A named colour scheme.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    name: &'static str,
    stops: &'static [Stop],
}

const MAGMA: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.25, [81, 18, 124]),
    (0.5, [183, 55, 121]),
    (0.75, [252, 137, 97]),
    (1.0, [252, 253, 191]),
];

const INFERNO: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.25, [87, 16, 110]),
    (0.5, [188, 55, 84]),
    (0.75, [249, 142, 9]),
    (1.0, [252, 255, 164]),
];

const PLASMA: &[Stop] = &[
    (0.0, [13, 8, 135]),
    (0.25, [126, 3, 168]),
    (0.5, [204, 71, 120]),
    (0.75, [248, 149, 64]),
    (1.0, [240, 249, 33]),
];

const CIVIDIS: &[Stop] = &[
    (0.0, [0, 34, 78]),
    (0.25, [65, 77, 108]),
    (0.5, [124, 123, 120]),
    (0.75, [188, 175, 111]),
    (1.0, [255, 234, 70]),
];

const VIRIDIS: &[Stop] = &[
    (0.0, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.5, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.0, [253, 231, 37]),
];

const HOT: &[Stop] = &[
    (0.0, [10, 0, 0]),
    (0.375, [255, 0, 0]),
    (0.75, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];

const COOL: &[Stop] = &[(0.0, [0, 255, 255]), (1.0, [255, 0, 255])];

const HSV: &[Stop] = &[
    (0.0, [255, 0, 0]),
    (1.0 / 6.0, [255, 255, 0]),
    (2.0 / 6.0, [0, 255, 0]),
    (3.0 / 6.0, [0, 255, 255]),
    (4.0 / 6.0, [0, 0, 255]),
    (5.0 / 6.0, [255, 0, 255]),
    (1.0, [255, 0, 0]),
];

const GRAY: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];

const PALETTES: &[Palette] = &[
    Palette { name: "magma", stops: MAGMA },
    Palette { name: "inferno", stops: INFERNO },
    Palette { name: "plasma", stops: PLASMA },
    Palette { name: "cividis", stops: CIVIDIS },
    Palette { name: "viridis", stops: VIRIDIS },
    Palette { name: "hot", stops: HOT },
    Palette { name: "cool", stops: COOL },
    Palette { name: "hsv", stops: HSV },
    Palette { name: "gray", stops: GRAY },
];

impl Default for Palette {
    fn default() -> Self {
        PALETTES[0]
    }
}

impl Palette {
    /// Look a scheme up by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Palette> {
        PALETTES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                Error::invalid(format!(
                    "unknown palette '{}', expected one of: {}",
                    name,
                    Palette::names().join(", ")
                ))
            })
    }

    /// Every scheme name, in selector order.
    pub fn names() -> Vec<&'static str> {
        PALETTES.iter().map(|p| p.name).collect()
    }

    /// The scheme's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The colour at position `t` along the scheme; `t` is clamped to
    /// `[0, 1]`.
    pub fn color(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        for (lo, hi) in self.stops.iter().tuple_windows() {
            if t <= hi.0 {
                let span = hi.0 - lo.0;
                let f = if span > 0.0 { (t - lo.0) / span } else { 0.0 };
                return lerp(lo.1, hi.1, f);
            }
        }
        self.stops[self.stops.len() - 1].1
    }

    /// Map every cell of the grid to an RGB triple, row-major.  Counts
    /// are scaled by `max_iter`, so points that never escaped take the
    /// last colour of the scheme.
    pub fn colorize(&self, grid: &IterationGrid, max_iter: u32) -> Vec<u8> {
        let scale = f64::from(max_iter.max(1));
        let mut rgb = Vec::with_capacity(grid.len() * 3);
        for &count in grid.as_slice() {
            rgb.extend_from_slice(&self.color(f64::from(count) / scale));
        }
        rgb
    }
}

fn lerp(a: [u8; 3], b: [u8; 3], f: f64) -> [u8; 3] {
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * f).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in Palette::names() {
            assert_eq!(Palette::from_name(name).unwrap().name(), name);
        }
        assert_eq!(Palette::names().len(), 9);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Palette::from_name("Viridis").unwrap().name(), "viridis");
    }

    #[test]
    fn unknown_name_is_invalid_input() {
        let e = Palette::from_name("rainbow").unwrap_err();
        assert!(e.is_invalid_input());
        assert!(format!("{}", e).contains("magma"));
    }

    #[test]
    fn default_is_magma() {
        assert_eq!(Palette::default().name(), "magma");
    }

    #[test]
    fn endpoints_hit_first_and_last_stops() {
        let gray = Palette::from_name("gray").unwrap();
        assert_eq!(gray.color(0.0), [0, 0, 0]);
        assert_eq!(gray.color(1.0), [255, 255, 255]);
        assert_eq!(gray.color(-3.0), [0, 0, 0]);
        assert_eq!(gray.color(7.0), [255, 255, 255]);
        assert_eq!(gray.color(::std::f64::NAN), [0, 0, 0]);
    }

    #[test]
    fn interpolates_between_stops() {
        let gray = Palette::from_name("gray").unwrap();
        assert_eq!(gray.color(0.5), [128, 128, 128]);
        let hot = Palette::from_name("hot").unwrap();
        assert_eq!(hot.color(0.375), [255, 0, 0]);
        assert_eq!(hot.color(0.5625), [255, 128, 0]);
    }

    #[test]
    fn colorize_scales_by_max_iter() {
        let mut grid = IterationGrid::new(2);
        grid.as_mut_slice().copy_from_slice(&[0, 40, 80, 80]);
        let rgb = Palette::from_name("gray").unwrap().colorize(&grid, 80);
        assert_eq!(rgb, vec![0, 0, 0, 128, 128, 128, 255, 255, 255, 255, 255, 255]);
    }
}
