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

//! `signmessage`
//!
//! Signs the rest of the line as a message
//!

use super::Args;
use hwshell::{Error, Request};

/// Signs a message
pub struct SignMessage;

impl super::Command for SignMessage {
    const MIN_ARGS: usize = 1;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::SignMessage {
            message: args.rest(0).into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Command;
    use super::*;

    #[test]
    fn joins_words() {
        assert_eq!(
            SignMessage::request(&Args::new(&["hello", "there", "world"])).unwrap(),
            Request::SignMessage {
                message: b"hello there world".to_vec(),
            },
        );
    }
}
