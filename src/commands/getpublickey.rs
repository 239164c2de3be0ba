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

//! `getpublickey`
//!
//! Gets the extended public key at a derivation path
//!

use super::Args;
use hwshell::constants::defaults;
use hwshell::{Error, Request};

/// Gets an xpub
pub struct GetPublicKey;

impl super::Command for GetPublicKey {
    const MIN_ARGS: usize = 0;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::GetPublicKey {
            path: args.path_or(0, defaults::PATH)?,
        })
    }
}
