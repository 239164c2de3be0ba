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

//! # Constants
//!
//! Various constants
//!

/// HID-related constants
pub mod hid {
    /// Constants for the TREZOR One
    pub mod trezor_one {
        /// USB vendor ID for the TREZOR One
        pub const VENDOR_ID: u16 = 0x534c;
        /// USB product ID for the TREZOR One
        pub const PRODUCT_ID: u16 = 0x0001;
    }

    /// Constants for the KeepKey, which speaks the same protocol
    pub mod keepkey {
        /// USB vendor ID for the KeepKey
        pub const VENDOR_ID: u16 = 0x2b24;
        /// USB product ID for the KeepKey
        pub const PRODUCT_ID: u16 = 0x0001;
    }

    /// Usage page of the wire interface (as opposed to U2F)
    pub const WIRE_USAGE_PAGE: u16 = 0xff00;
}

/// Communication constants
pub mod wire {
    /// Size of an individual HID report
    pub const REPORT_SIZE: usize = 64;
    /// First byte of every report
    pub const REPORT_MAGIC: u8 = b'?';
    /// Second and third bytes of the first report of a message
    pub const HEADER_MAGIC: [u8; 2] = [b'#', b'#'];
    /// Length of the first report's header (magic, type, length)
    pub const FIRST_HEADER_LEN: usize = 9;
    /// Length of a continuation report's header
    pub const CONT_HEADER_LEN: usize = 1;
    /// Largest message we are willing to reassemble
    pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;
}

/// Protocol message types
///
/// These are the numeric type tags from the TREZOR `messages.proto`. A
/// response's type tag doubles as its response kind.
#[allow(missing_docs)]
pub mod message_type {
    pub const INITIALIZE: u16 = 0;
    pub const PING: u16 = 1;
    pub const SUCCESS: u16 = 2;
    pub const FAILURE: u16 = 3;
    pub const CHANGE_PIN: u16 = 4;
    pub const GET_ENTROPY: u16 = 9;
    pub const ENTROPY: u16 = 10;
    pub const GET_PUBLIC_KEY: u16 = 11;
    pub const PUBLIC_KEY: u16 = 12;
    pub const FEATURES: u16 = 17;
    pub const PIN_MATRIX_REQUEST: u16 = 18;
    pub const PIN_MATRIX_ACK: u16 = 19;
    pub const CANCEL: u16 = 20;
    pub const CIPHER_KEY_VALUE: u16 = 23;
    pub const CLEAR_SESSION: u16 = 24;
    pub const APPLY_SETTINGS: u16 = 25;
    pub const BUTTON_REQUEST: u16 = 26;
    pub const BUTTON_ACK: u16 = 27;
    pub const GET_ADDRESS: u16 = 29;
    pub const ADDRESS: u16 = 30;
    pub const SIGN_MESSAGE: u16 = 38;
    pub const VERIFY_MESSAGE: u16 = 39;
    pub const MESSAGE_SIGNATURE: u16 = 40;
    pub const PASSPHRASE_REQUEST: u16 = 41;
    pub const CIPHERED_KEY_VALUE: u16 = 48;
    pub const SIGN_IDENTITY: u16 = 53;
    pub const SIGNED_IDENTITY: u16 = 54;
    pub const GET_FEATURES: u16 = 55;

    /// Response kind given to lines the console could not make sense of.
    /// Never sent by a device.
    pub const UNRECOGNIZED: u16 = 999;
}

/// Defaults for optional command arguments
pub mod defaults {
    /// Derivation path used when a command's path argument is omitted
    pub const PATH: &str = "m/44'/0'/0'";
    /// Coin name used by `getaddress` when none is given
    pub const COIN_NAME: &str = "Bitcoin";
}
