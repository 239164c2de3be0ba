// HWSHELL
// Written in 2026 by
//   The hwshell developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! `sethomescreen`
//!
//! Replaces the device's home screen image
//!

use super::Args;
use hwshell::{Error, Request};
use std::fs;
use std::path::PathBuf;

/// Sets the home screen
///
/// The file is sent as-is, so it must already be in the device's
/// home-screen format.
pub struct SetHomescreen;

impl super::Command for SetHomescreen {
    const MIN_ARGS: usize = 1;

    fn request(args: &Args) -> Result<Request, Error> {
        let path = PathBuf::from(args.get(0));
        match fs::read(&path) {
            Ok(image) => Ok(Request::SetHomescreen { image }),
            Err(error) => Err(Error::UnreadableImage { path, error }),
        }
    }
}
