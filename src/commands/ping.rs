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

//! `ping`
//!
//! Asks the device to echo a message, optionally behind PIN, passphrase
//! and button protection
//!

use super::Args;
use hwshell::{Error, Request};

/// Echoes a message
pub struct Ping;

impl super::Command for Ping {
    const MIN_ARGS: usize = 1;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::Ping {
            message: args.get(0).to_owned(),
            pin_protection: args.flag_or(1, false),
            passphrase_protection: args.flag_or(2, false),
            button_protection: args.flag_or(3, false),
        })
    }
}
