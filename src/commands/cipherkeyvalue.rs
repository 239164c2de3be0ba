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

//! `cipherkeyvalue`
//!
//! Encrypts or decrypts a value with a key derived on the device
//!

use super::Args;
use hwshell::constants::defaults;
use hwshell::{Error, Request};

/// Encrypts/decrypts a value
pub struct CipherKeyValue;

impl super::Command for CipherKeyValue {
    const MIN_ARGS: usize = 3;

    fn request(args: &Args) -> Result<Request, Error> {
        Ok(Request::CipherKeyValue {
            encrypt: args.flag_or(0, true),
            key: args.get(1).to_owned(),
            value: args.get(2).as_bytes().to_vec(),
            path: args.path_or(3, defaults::PATH)?,
            iv: args.string_or(4, "").into_bytes(),
            ask_on_encrypt: args.flag_or(5, true),
            ask_on_decrypt: args.flag_or(6, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Command;
    use super::*;
    use hwshell::util::parse_path;

    #[test]
    fn defaults() {
        assert_eq!(
            CipherKeyValue::request(&Args::new(&["1", "secret", "value"])).unwrap(),
            Request::CipherKeyValue {
                encrypt: true,
                key: "secret".to_owned(),
                value: b"value".to_vec(),
                path: parse_path("m/44'/0'/0'").unwrap(),
                iv: vec![],
                ask_on_encrypt: true,
                ask_on_decrypt: true,
            },
        );
    }

    #[test]
    fn everything_given() {
        let args = ["0", "k", "v", "m/10'", "ivivivivivivivivi", "false", "1"];
        assert_eq!(
            CipherKeyValue::request(&Args::new(&args)).unwrap(),
            Request::CipherKeyValue {
                encrypt: false,
                key: "k".to_owned(),
                value: b"v".to_vec(),
                path: parse_path("m/10'").unwrap(),
                iv: b"ivivivivivivivivi".to_vec(),
                ask_on_encrypt: false,
                ask_on_decrypt: true,
            },
        );
    }

    #[test]
    fn bad_path() {
        assert!(matches!(
            CipherKeyValue::request(&Args::new(&["1", "k", "v", "m/44'/x"])),
            Err(Error::InvalidPath { .. })
        ));
    }
}
