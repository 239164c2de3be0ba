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

//! # Messages
//!
//! Structured versions of the protocol messages the console sends, and the
//! rendering of whatever comes back. Field numbers follow the TREZOR
//! `messages.proto` and `types.proto` definitions.
//!

use base64::{engine::general_purpose::STANDARD, Engine as _};
use miniscript::bitcoin::bip32;
use prost::Message as _;

use super::protos;
use crate::constants::message_type as mt;
use crate::Error;

/// The identity a SignIdentity request is made for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// URI scheme, e.g. `https`
    pub proto: String,
    /// User part of the URI, may be empty
    pub user: String,
    /// Host part of the URI
    pub host: String,
    /// Port, as a string, may be empty
    pub port: String,
    /// Path part of the URI, may be empty
    pub path: String,
    /// Identity index
    pub index: u32,
}

impl Identity {
    fn to_proto(&self) -> protos::IdentityType {
        let non_empty = |s: &str| Some(s.to_owned()).filter(|s| !s.is_empty());
        protos::IdentityType {
            proto: non_empty(&self.proto),
            user: non_empty(&self.user),
            host: non_empty(&self.host),
            port: non_empty(&self.port),
            path: non_empty(&self.path),
            index: Some(self.index),
        }
    }
}

/// A message that can be sent to the device
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Ping {
        message: String,
        pin_protection: bool,
        passphrase_protection: bool,
        button_protection: bool,
    },
    SignMessage {
        message: Vec<u8>,
    },
    VerifyMessage {
        address: String,
        signature: Vec<u8>,
        message: Vec<u8>,
    },
    GetAddress {
        path: bip32::DerivationPath,
        show_display: bool,
        coin_name: String,
    },
    GetEntropy {
        size: u32,
    },
    SetLabel {
        label: String,
    },
    SetHomescreen {
        image: Vec<u8>,
    },
    GetPublicKey {
        path: bip32::DerivationPath,
    },
    SignIdentity {
        identity: Identity,
        challenge_hidden: Vec<u8>,
        challenge_visual: String,
    },
    GetFeatures,
    ClearSession,
    ChangePin,
    CipherKeyValue {
        path: bip32::DerivationPath,
        key: String,
        value: Vec<u8>,
        encrypt: bool,
        ask_on_encrypt: bool,
        ask_on_decrypt: bool,
        iv: Vec<u8>,
    },
    /// Reply to a PIN challenge, as positions on the scrambled matrix
    PinMatrixAck {
        pin: String,
    },
    /// Continue after a button request
    ButtonAck,
}

fn address_n(path: &bip32::DerivationPath) -> Vec<u32> {
    path.as_ref().iter().map(|&child| u32::from(child)).collect()
}

impl Request {
    /// The protocol type tag of this message
    pub fn message_type(&self) -> u16 {
        match *self {
            Request::Ping { .. } => mt::PING,
            Request::SignMessage { .. } => mt::SIGN_MESSAGE,
            Request::VerifyMessage { .. } => mt::VERIFY_MESSAGE,
            Request::GetAddress { .. } => mt::GET_ADDRESS,
            Request::GetEntropy { .. } => mt::GET_ENTROPY,
            Request::SetLabel { .. } | Request::SetHomescreen { .. } => mt::APPLY_SETTINGS,
            Request::GetPublicKey { .. } => mt::GET_PUBLIC_KEY,
            Request::SignIdentity { .. } => mt::SIGN_IDENTITY,
            Request::GetFeatures => mt::GET_FEATURES,
            Request::ClearSession => mt::CLEAR_SESSION,
            Request::ChangePin => mt::CHANGE_PIN,
            Request::CipherKeyValue { .. } => mt::CIPHER_KEY_VALUE,
            Request::PinMatrixAck { .. } => mt::PIN_MATRIX_ACK,
            Request::ButtonAck => mt::BUTTON_ACK,
        }
    }

    /// Encode the message body
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Request::Ping {
                ref message,
                pin_protection,
                passphrase_protection,
                button_protection,
            } => protos::Ping {
                message: Some(message.clone()),
                button_protection: Some(button_protection),
                pin_protection: Some(pin_protection),
                passphrase_protection: Some(passphrase_protection),
            }
            .encode_to_vec(),
            Request::SignMessage { ref message } => protos::SignMessage {
                address_n: vec![],
                message: Some(message.clone()),
            }
            .encode_to_vec(),
            Request::VerifyMessage {
                ref address,
                ref signature,
                ref message,
            } => protos::VerifyMessage {
                address: Some(address.clone()),
                signature: Some(signature.clone()),
                message: Some(message.clone()),
            }
            .encode_to_vec(),
            Request::GetAddress {
                ref path,
                show_display,
                ref coin_name,
            } => protos::GetAddress {
                address_n: address_n(path),
                coin_name: Some(coin_name.clone()),
                show_display: Some(show_display),
            }
            .encode_to_vec(),
            Request::GetEntropy { size } => protos::GetEntropy { size: Some(size) }.encode_to_vec(),
            Request::SetLabel { ref label } => protos::ApplySettings {
                label: Some(label.clone()),
                homescreen: None,
            }
            .encode_to_vec(),
            Request::SetHomescreen { ref image } => protos::ApplySettings {
                label: None,
                homescreen: Some(image.clone()),
            }
            .encode_to_vec(),
            Request::GetPublicKey { ref path } => protos::GetPublicKey {
                address_n: address_n(path),
            }
            .encode_to_vec(),
            Request::SignIdentity {
                ref identity,
                ref challenge_hidden,
                ref challenge_visual,
            } => protos::SignIdentity {
                identity: Some(identity.to_proto()),
                challenge_hidden: Some(challenge_hidden.clone()),
                challenge_visual: Some(challenge_visual.clone()),
            }
            .encode_to_vec(),
            Request::ChangePin => protos::ChangePin { remove: Some(false) }.encode_to_vec(),
            Request::CipherKeyValue {
                ref path,
                ref key,
                ref value,
                encrypt,
                ask_on_encrypt,
                ask_on_decrypt,
                ref iv,
            } => protos::CipherKeyValue {
                address_n: address_n(path),
                key: Some(key.clone()),
                value: Some(value.clone()),
                encrypt: Some(encrypt),
                ask_on_encrypt: Some(ask_on_encrypt),
                ask_on_decrypt: Some(ask_on_decrypt),
                iv: Some(iv.clone()).filter(|iv| !iv.is_empty()),
            }
            .encode_to_vec(),
            Request::PinMatrixAck { ref pin } => protos::PinMatrixAck {
                pin: Some(pin.clone()),
            }
            .encode_to_vec(),
            // No fields at all
            Request::GetFeatures | Request::ClearSession | Request::ButtonAck => vec![],
        }
    }
}

/// A decoded reply: display text plus the reply's message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Human-readable rendering of the reply
    pub text: String,
    /// Message type of the reply, which decides what the console does next
    pub kind: u16,
}

impl Response {
    /// Constructor
    pub fn new<S: Into<String>>(text: S, kind: u16) -> Self {
        Response {
            text: text.into(),
            kind,
        }
    }

    /// The response the console shows for a line it did not understand
    pub fn unrecognized(line: &str) -> Self {
        Response::new(line, mt::UNRECOGNIZED)
    }

    /// Whether the device is waiting for a PIN
    pub fn is_pin_request(&self) -> bool {
        self.kind == mt::PIN_MATRIX_REQUEST
    }

    /// Whether the device is waiting for the user to press a button
    pub fn is_button_request(&self) -> bool {
        self.kind == mt::BUTTON_REQUEST
    }

    /// Render a reply of the given type
    pub fn decode(kind: u16, data: &[u8]) -> Result<Response, Error> {
        let text = match kind {
            mt::SUCCESS => protos::Success::decode(data)?
                .message
                .unwrap_or_else(|| "Success".to_owned()),
            mt::FAILURE => protos::Failure::decode(data)?
                .message
                .unwrap_or_else(|| "Failure".to_owned()),
            mt::ENTROPY | mt::CIPHERED_KEY_VALUE => {
                hex::encode(protos::Payload::decode(data)?.data.unwrap_or_default())
            }
            mt::PUBLIC_KEY => protos::PublicKey::decode(data)?.xpub.unwrap_or_default(),
            mt::ADDRESS => protos::Address::decode(data)?.address.unwrap_or_default(),
            mt::MESSAGE_SIGNATURE => {
                let sig = protos::MessageSignature::decode(data)?;
                format!(
                    "address={} signature={}",
                    sig.address.unwrap_or_default(),
                    STANDARD.encode(sig.signature.unwrap_or_default()),
                )
            }
            mt::SIGNED_IDENTITY => {
                let signed = protos::SignedIdentity::decode(data)?;
                format!(
                    "address={} public_key={} signature={}",
                    signed.address.unwrap_or_default(),
                    hex::encode(signed.public_key.unwrap_or_default()),
                    STANDARD.encode(signed.signature.unwrap_or_default()),
                )
            }
            mt::FEATURES => features_json(&protos::Features::decode(data)?),
            mt::PIN_MATRIX_REQUEST => match protos::PinMatrixRequest::decode(data)?.r#type {
                Some(2) => "Please enter new PIN:",
                Some(3) => "Please re-enter new PIN:",
                _ => "Please enter current PIN:",
            }
            .to_owned(),
            mt::BUTTON_REQUEST => "Confirm action on the device".to_owned(),
            mt::PASSPHRASE_REQUEST => "Passphrase requested".to_owned(),
            _ => hex::encode(data),
        };
        Ok(Response { text, kind })
    }
}

fn features_json(features: &protos::Features) -> String {
    let version = format!(
        "{}.{}.{}",
        features.major_version.unwrap_or(0),
        features.minor_version.unwrap_or(0),
        features.patch_version.unwrap_or(0),
    );
    serde_json::json!({
        "vendor": features.vendor,
        "version": version,
        "bootloader_mode": features.bootloader_mode.unwrap_or(false),
        "device_id": features.device_id,
        "pin_protection": features.pin_protection.unwrap_or(false),
        "passphrase_protection": features.passphrase_protection.unwrap_or(false),
        "label": features.label,
        "initialized": features.initialized.unwrap_or(false),
    })
    .to_string()
}
