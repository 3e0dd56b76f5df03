// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors surfaced by the renderer.  Everything the core can reject is
//! rejected before any iteration begins, so a caller never sees a
//! half-populated grid.

use std::io;
use std::result;

/// The failure modes of the crate.
#[derive(Debug, Fail)]
pub enum Error {
    /// The caller handed us something the computation cannot honor:
    /// mismatched or empty axes, a zero iteration cap, a non-positive
    /// escape radius, and so on.
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),

    /// A worker thread panicked before the grid was joined.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// Writing an image failed.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Error {
        Error::InvalidInput(msg.into())
    }

    /// True for the precondition failures of the core.
    pub fn is_invalid_input(&self) -> bool {
        match *self {
            Error::InvalidInput(_) => true,
            _ => false,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
