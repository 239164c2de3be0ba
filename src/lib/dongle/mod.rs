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

//! # Dongle
//!
//! Abstract API for communicating with the device
//!

use log::debug;

use crate::Error;
use self::message::{Request, Response};

pub mod message;
mod protos;
pub mod trezor;

/// Trait representing an abstract hardware wallet
pub trait Dongle {
    /// Sends a raw message to the device and returns its reply, which is a
    /// pair (message type, raw bytes). Generally this function is never used
    /// directly.
    fn exchange(&mut self, msg_type: u16, payload: &[u8]) -> Result<(u16, Vec<u8>), Error>;

    /// Sends a request to the device and decodes whatever it replies with
    ///
    /// Replies asking for a PIN or a button press are ordinary responses;
    /// it is up to the caller to continue the conversation.
    fn call(&mut self, request: &Request) -> Result<Response, Error> {
        let msg_type = request.message_type();
        debug!("sending message type {}", msg_type);
        let (kind, data) = self.exchange(msg_type, &request.encode())?;
        debug!("received message type {} ({} bytes)", kind, data.len());
        Response::decode(kind, &data)
    }
}
