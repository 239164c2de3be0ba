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

//! `clearsession`
//!
//! Forgets cached PIN and passphrase
//!

use super::Args;
use hwshell::{Error, Request};

/// Clears the session
pub struct ClearSession;

impl super::Command for ClearSession {
    const MIN_ARGS: usize = 0;

    fn request(_args: &Args) -> Result<Request, Error> {
        Ok(Request::ClearSession)
    }
}
