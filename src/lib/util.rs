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

//! # Miscellaneous Functions

use base64::{engine::general_purpose::STANDARD, Engine as _};
use miniscript::bitcoin::bip32;
use std::str::FromStr;

use crate::dongle::message::Identity;
use crate::Error;

/// Parse a BIP32 derivation path, e.g. `m/44'/0'/0'/0/27`
///
/// The path must start at the root `m`; each index must be below 2^31
/// and may be marked hardened with a trailing `'` or `h`. Indices are
/// digits only, so a sign is refused.
pub fn parse_path(path: &str) -> Result<bip32::DerivationPath, Error> {
    let invalid = |error| Error::InvalidPath {
        path: path.to_owned(),
        error,
    };
    // `u32::from_str` takes a leading `+`, which bip32 passes through
    if path.split('/').skip(1).any(|index| index.starts_with('+')) {
        return Err(invalid(bip32::Error::InvalidChildNumberFormat));
    }
    bip32::DerivationPath::from_str(path).map_err(invalid)
}

/// Coerce a command argument to a boolean
///
/// Only the literals `1` and `true` are true. Everything else is false.
pub fn parse_bool(arg: &str) -> bool {
    arg == "1" || arg == "true"
}

/// Coerce a command argument to an integer, falling back to zero
pub fn parse_int(arg: &str) -> u32 {
    arg.parse().unwrap_or(0)
}

/// Decode a standard base64 signature
pub fn parse_signature(sig: &str) -> Result<Vec<u8>, Error> {
    Ok(STANDARD.decode(sig)?)
}

/// Split a URI into the pieces of a SignIdentity identity
pub fn parse_identity(uri: &str, index: u32) -> Result<Identity, Error> {
    let url = url::Url::parse(uri).map_err(|error| Error::InvalidUri {
        uri: uri.to_owned(),
        error,
    })?;

    let path = match url.path() {
        "/" if !uri.ends_with('/') => String::new(),
        path => path.to_owned(),
    };
    Ok(Identity {
        proto: url.scheme().to_owned(),
        user: url.username().to_owned(),
        host: url.host_str().unwrap_or_default().to_owned(),
        port: url.port().map(|p| p.to_string()).unwrap_or_default(),
        path,
        index,
    })
}
