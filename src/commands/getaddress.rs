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

//! `getaddress`
//!
//! Gets an address, optionally showing it on the device
//!

use super::Args;
use hwshell::constants::defaults;
use hwshell::{Error, Request};

/// Gets an address
pub struct GetAddress;

impl super::Command for GetAddress {
    const MIN_ARGS: usize = 0;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::GetAddress {
            path: args.path_or(0, defaults::PATH)?,
            show_display: args.flag_or(1, false),
            coin_name: args.string_or(2, defaults::COIN_NAME),
        })
    }
}
