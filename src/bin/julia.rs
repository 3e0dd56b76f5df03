// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate juliaset;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use juliaset::image_out::{write_graymap, write_pixmap};
use juliaset::{Config, Error, IterationGrid, Palette, Sweep};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const BOUNDS: &str = "bounds";
const PARAMETER: &str = "c";
const ITERATIONS: &str = "iterations";
const RADIUS: &str = "radius";
const THREADS: &str = "threads";
const PALETTE: &str = "palette";
const FRAMES: &str = "frames";
const STEP: &str = "step";

fn args<'a>(max_threads: usize, default_threads: &'a str) -> ArgMatches<'a> {
    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; .pgm writes raw grayscale counts, anything else a coloured PPM"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800")
                .validator(|s| {
                    validate_range(
                        &s,
                        1usize,
                        8192,
                        "Could not parse grid size",
                        "Grid size must be between 1 and 8192",
                    )
                })
                .help("Samples along each axis of the square grid"),
        )
        .arg(
            Arg::with_name(BOUNDS)
                .required(false)
                .long(BOUNDS)
                .short("b")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.5,1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse axis bounds"))
                .help("Interval sampled on both axes, as lo,hi"),
        )
        .arg(
            Arg::with_name(PARAMETER)
                .required(false)
                .long(PARAMETER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.7,0.27015")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse parameter c"))
                .help("The complex parameter c, as re,im"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("80")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1u32,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("2.0")
                .validator(move |s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        1.0e6,
                        "Could not parse escape radius",
                        "Escape radius must be positive",
                    )
                })
                .help("Escape radius"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in renderer"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("magma")
                .validator(|s| Palette::from_name(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Colour scheme for PPM output"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .required(false)
                .long(FRAMES)
                .short("f")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1usize,
                        10_000,
                        "Could not parse frame count",
                        "Frame count must be between 1 and 10000",
                    )
                })
                .help("Number of frames to render, sweeping the real part of c"),
        )
        .arg(
            Arg::with_name(STEP)
                .required(false)
                .long(STEP)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.01")
                .validator(|s| match f64::from_str(&s) {
                    Ok(v) if v.is_finite() => Ok(()),
                    _ => Err("Could not parse sweep step".to_string()),
                })
                .help("Change in the real part of c between frames"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| Error::InvalidInput(format!("could not parse --{}", name)))
}

fn config(matches: &ArgMatches) -> Result<Config, Error> {
    let bounds = matches
        .value_of(BOUNDS)
        .and_then(|s| parse_pair(s, ','))
        .ok_or_else(|| Error::InvalidInput("could not parse --bounds".to_string()))?;
    let c = matches
        .value_of(PARAMETER)
        .and_then(parse_complex)
        .ok_or_else(|| Error::InvalidInput("could not parse --c".to_string()))?;

    Ok(Config {
        dim: value(matches, SIZE)?,
        x_bounds: bounds,
        y_bounds: bounds,
        max_iter: value(matches, ITERATIONS)?,
        escape_radius: value(matches, RADIUS)?,
        c,
        threads: value(matches, THREADS)?,
    })
}

/// With more than one frame, number each file: `out.ppm` becomes
/// `out-0000.ppm`, `out-0001.ppm`, and so on.
fn frame_path(output: &Path, frame: usize, frames: usize) -> PathBuf {
    if frames == 1 {
        return output.to_path_buf();
    }
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match output.extension() {
        Some(ext) => format!("{}-{:04}.{}", stem, frame, ext.to_string_lossy()),
        None => format!("{}-{:04}", stem, frame),
    };
    output.with_file_name(name)
}

fn is_graymap(output: &Path) -> bool {
    output
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pgm"))
        .unwrap_or(false)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config(matches)?;
    let palette = Palette::from_name(matches.value_of(PALETTE).unwrap_or("magma"))?;
    let frames: usize = value(matches, FRAMES)?;
    let step: f64 = value(matches, STEP)?;
    let output = Path::new(matches.value_of(OUTPUT).unwrap_or(""));

    let renderer = config.escape_time_grid()?;
    let sweep = Sweep::new(config.c, step)?;
    info!(
        "{}x{} grid, {} iterations, radius {}, {} thread(s)",
        renderer.dim(),
        renderer.dim(),
        renderer.max_iter(),
        renderer.escape_radius(),
        renderer.threads()
    );

    let mut grid = IterationGrid::new(renderer.dim());
    for (frame, c) in sweep.take(frames).enumerate() {
        let started = Instant::now();
        renderer.compute_into(c, &mut grid)?;
        debug!("frame {} rendered in {:?}", frame, started.elapsed());

        let path = frame_path(output, frame, frames);
        if is_graymap(&path) {
            write_graymap(&path, &grid, renderer.max_iter())?;
        } else {
            let rgb = palette.colorize(&grid, renderer.max_iter());
            write_pixmap(&path, &rgb, renderer.dim())?;
        }
        info!("c = {:.5} + {:.5}i -> {}", c.re, c.im, path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let max_threads = num_cpus::get();
    let default_threads = max_threads.to_string();
    let matches = args(max_threads, &default_threads);
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_frame_keeps_the_name() {
        let path = frame_path(Path::new("out/julia.ppm"), 0, 1);
        assert_eq!(path, PathBuf::from("out/julia.ppm"));
    }

    #[test]
    fn frames_are_numbered_before_the_extension() {
        let path = frame_path(Path::new("out/julia.ppm"), 7, 20);
        assert_eq!(path, PathBuf::from("out/julia-0007.ppm"));
        let path = frame_path(Path::new("julia"), 12, 20);
        assert_eq!(path, PathBuf::from("julia-0012"));
    }

    #[test]
    fn pgm_extension_selects_graymap() {
        assert!(is_graymap(Path::new("a.pgm")));
        assert!(is_graymap(Path::new("a.PGM")));
        assert!(!is_graymap(Path::new("a.ppm")));
        assert!(!is_graymap(Path::new("a")));
    }

    #[test]
    fn parse_complex_reads_negative_parts() {
        assert_eq!(parse_complex("-0.7,0.27015"), Some(Complex::new(-0.7, 0.27015)));
        assert_eq!(parse_complex("-0.7"), None);
    }

    #[test]
    fn validate_range_checks_both_ends() {
        assert!(validate_range("4", 1, 8, "nan", "range").is_ok());
        assert_eq!(validate_range("9", 1, 8, "nan", "range"), Err("range".to_string()));
        assert_eq!(validate_range("x", 1, 8, "nan", "range"), Err("nan".to_string()));
    }
}
