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

//! `signidentity`
//!
//! Signs a login challenge for a URI
//!

use super::Args;
use hwshell::{util, Error, Request};

/// Signs an identity challenge
pub struct SignIdentity;

impl super::Command for SignIdentity {
    const MIN_ARGS: usize = 3;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::SignIdentity {
            identity: util::parse_identity(args.get(0), args.int_or(3, 0))?,
            challenge_hidden: args.get(1).as_bytes().to_vec(),
            challenge_visual: args.get(2).to_owned(),
        })
    }
}
