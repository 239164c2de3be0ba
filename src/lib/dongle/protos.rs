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

//! # Wire Messages
//!
//! The subset of the TREZOR `messages.proto` and `types.proto` definitions
//! the console uses. Everything is proto2, so scalars are `optional` and
//! present whenever they are `Some`; `address_n` is never packed. Fields
//! of replies we do not display are left out and skipped when decoding.
//!

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct Ping {
    #[prost(string, optional, tag = "1")]
    pub message: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub button_protection: Option<bool>,
    #[prost(bool, optional, tag = "3")]
    pub pin_protection: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub passphrase_protection: Option<bool>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SignMessage {
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: Vec<u32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub message: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct VerifyMessage {
    #[prost(string, optional, tag = "1")]
    pub address: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub message: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetAddress {
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: Vec<u32>,
    #[prost(string, optional, tag = "2")]
    pub coin_name: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub show_display: Option<bool>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetEntropy {
    #[prost(uint32, optional, tag = "1")]
    pub size: Option<u32>,
}

/// Used for both `setlabel` and `sethomescreen`
#[derive(Clone, PartialEq, Message)]
pub struct ApplySettings {
    #[prost(string, optional, tag = "2")]
    pub label: Option<String>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub homescreen: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetPublicKey {
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: Vec<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct IdentityType {
    #[prost(string, optional, tag = "1")]
    pub proto: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub user: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub host: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub port: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub path: Option<String>,
    #[prost(uint32, optional, tag = "6")]
    pub index: Option<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SignIdentity {
    #[prost(message, optional, tag = "1")]
    pub identity: Option<IdentityType>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub challenge_hidden: Option<Vec<u8>>,
    #[prost(string, optional, tag = "3")]
    pub challenge_visual: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChangePin {
    #[prost(bool, optional, tag = "1")]
    pub remove: Option<bool>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CipherKeyValue {
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: Vec<u32>,
    #[prost(string, optional, tag = "2")]
    pub key: Option<String>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub value: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "4")]
    pub encrypt: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub ask_on_encrypt: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub ask_on_decrypt: Option<bool>,
    #[prost(bytes = "vec", optional, tag = "7")]
    pub iv: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PinMatrixAck {
    #[prost(string, optional, tag = "1")]
    pub pin: Option<String>,
}

// Replies

#[derive(Clone, PartialEq, Message)]
pub struct Success {
    #[prost(string, optional, tag = "1")]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Failure {
    #[prost(int32, optional, tag = "1")]
    pub code: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub message: Option<String>,
}

/// `Entropy` and `CipheredKeyValue` both carry their payload in field 1
#[derive(Clone, PartialEq, Message)]
pub struct Payload {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PublicKey {
    #[prost(string, optional, tag = "2")]
    pub xpub: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Address {
    #[prost(string, optional, tag = "1")]
    pub address: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct MessageSignature {
    #[prost(string, optional, tag = "1")]
    pub address: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SignedIdentity {
    #[prost(string, optional, tag = "1")]
    pub address: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub public_key: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub signature: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Features {
    #[prost(string, optional, tag = "1")]
    pub vendor: Option<String>,
    #[prost(uint32, optional, tag = "2")]
    pub major_version: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub minor_version: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub patch_version: Option<u32>,
    #[prost(bool, optional, tag = "5")]
    pub bootloader_mode: Option<bool>,
    #[prost(string, optional, tag = "6")]
    pub device_id: Option<String>,
    #[prost(bool, optional, tag = "7")]
    pub pin_protection: Option<bool>,
    #[prost(bool, optional, tag = "8")]
    pub passphrase_protection: Option<bool>,
    #[prost(string, optional, tag = "10")]
    pub label: Option<String>,
    #[prost(bool, optional, tag = "12")]
    pub initialized: Option<bool>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PinMatrixRequest {
    /// 1: current PIN, 2: new PIN, 3: new PIN again
    #[prost(uint32, optional, tag = "1")]
    pub r#type: Option<u32>,
}
