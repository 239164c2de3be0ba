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

//! # hwshell Library
//!
//! Client-side support for talking to TREZOR-style hardware wallets: the
//! messages the `hwshell` console can send, rendering of the replies, and
//! a HID transport. The conversation itself (PIN challenges, button
//! confirmations) is driven by the caller; this library only ever does a
//! single request/reply exchange at a time.
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub mod constants;
mod dongle;
mod error;
pub mod util;

pub use dongle::message::{Identity, Request, Response};
pub use dongle::trezor::Trezor;
pub use dongle::Dongle;
pub use error::Error;

/// Re-exports of types from `hidapi` with nicer names
pub mod hid {
    pub use hidapi::HidApi as Api;
    pub use hidapi::HidDevice as Device;
    pub use hidapi::HidError as Error;
}
