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

//! `verifymessage`
//!
//! Asks the device to check a message signature
//!

use super::Args;
use hwshell::{util, Error, Request};

/// Verifies a signed message
pub struct VerifyMessage;

impl super::Command for VerifyMessage {
    const MIN_ARGS: usize = 3;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::VerifyMessage {
            address: args.get(0).to_owned(),
            signature: util::parse_signature(args.get(1))?,
            message: args.get(2).as_bytes().to_vec(),
        })
    }
}
