// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing rendered grids to disk as binary PNM files.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use error::{Error, Result};
use grid::IterationGrid;

/// Write a square image of RGB triples (as produced by
/// `Palette::colorize`) as a binary PPM.
pub fn write_pixmap<P: AsRef<Path>>(path: P, rgb: &[u8], dim: usize) -> Result<()> {
    if rgb.len() != dim * dim * 3 {
        return Err(Error::invalid(format!(
            "expected {} bytes of RGB for a {}x{} image, got {}",
            dim * dim * 3,
            dim,
            dim,
            rgb.len()
        )));
    }
    let output = BufWriter::new(File::create(path)?);
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(rgb, dim as u32, dim as u32, ColorType::RGB(8))?;
    Ok(())
}

/// Write the grid as a binary PGM, scaling counts so that `max_iter`
/// is white.
pub fn write_graymap<P: AsRef<Path>>(path: P, grid: &IterationGrid, max_iter: u32) -> Result<()> {
    let pixels = grayscale(grid, max_iter);
    let output = BufWriter::new(File::create(path)?);
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(
        &pixels[..],
        grid.dim() as u32,
        grid.dim() as u32,
        ColorType::Gray(8),
    )?;
    Ok(())
}

fn grayscale(grid: &IterationGrid, max_iter: u32) -> Vec<u8> {
    let max_iter = u64::from(max_iter.max(1));
    grid.as_slice()
        .iter()
        .map(|&count| ((u64::from(count).min(max_iter) * 255) / max_iter) as u8)
        .collect()
}
