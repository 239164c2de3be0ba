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

//! `setlabel`
//!
//! Renames the device
//!

use super::Args;
use hwshell::{Error, Request};

/// Sets the device label to the rest of the line
pub struct SetLabel;

impl super::Command for SetLabel {
    const MIN_ARGS: usize = 1;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::SetLabel { label: args.rest(0) })
    }
}
