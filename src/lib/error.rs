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

//! # Error Handling
//!
//! The `Display` strings of the local validation variants are shown to the
//! user as-is, so keep them readable.

use miniscript::bitcoin::bip32;
use std::{io, path::PathBuf};
use thiserror::Error;

/// hwshell error
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum Error {
    #[error("incorrect report magic (expected {expected:?}, found {found:?})")]
    ReportWrongMagic { expected: u8, found: u8 },
    #[error("incorrect message header magic")]
    HeaderWrongMagic,
    #[error("message of {0} bytes is too long")]
    MessageTooLong(usize),
    #[error("malformed reply from device")]
    MalformedReply(#[from] prost::DecodeError),
    #[error("no device detected")]
    DongleNotFound,
    #[error("hidapi")]
    Hid(#[from] hidapi::HidError),
    #[error("io")]
    Io(#[from] io::Error),
    #[error("unexpected end-of-data")]
    UnexpectedEof,
    #[error("missing parameters for {command} (expected at least {expected}, found {found})")]
    MissingParameters {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid BIP32 path {path:?} (example: m/44'/0'/0'/0/27)")]
    InvalidPath {
        path: String,
        #[source]
        error: bip32::Error,
    },
    #[error("error reading image {}", .path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("invalid identity URI {uri:?}")]
    InvalidUri {
        uri: String,
        #[source]
        error: url::ParseError,
    },
    #[error("signature is not valid base64")]
    InvalidSignature(#[from] base64::DecodeError),
}
