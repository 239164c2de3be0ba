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

//! `getentropy`
//!
//! Gets random bytes from the device
//!

use super::Args;
use hwshell::{Error, Request};

/// Gets entropy
pub struct GetEntropy;

impl super::Command for GetEntropy {
    const MIN_ARGS: usize = 1;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::GetEntropy {
            size: args.int_or(0, 0),
        })
    }
}
