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

//! # TREZOR Dongle
//!
//! Specific support for TREZOR-style dongles over HID
//!

use core::cmp;
use core::convert::TryFrom as _;
use std::time::Duration;

use byteorder::{BigEndian, ByteOrder};
use log::info;

use crate::constants::wire::{self, REPORT_SIZE};
use crate::dongle::Dongle;
use crate::{constants, hid, Error};

/// How long a single HID read waits before polling again. A device waiting
/// on its buttons may take arbitrarily long, so reads are retried forever.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// A single HID report, without the report ID
type Report = [u8; REPORT_SIZE];

/// Structure representing the device
pub struct Trezor {
    hid_dev: hid::Device,
}

impl Dongle for Trezor {
    fn exchange(&mut self, msg_type: u16, payload: &[u8]) -> Result<(u16, Vec<u8>), Error> {
        for report in encode_reports(msg_type, payload)? {
            write_report(&self.hid_dev, &report)?;
        }
        assemble(|| read_report(&self.hid_dev, POLL_INTERVAL))
    }
}

impl Trezor {
    /// Counts the attached devices matching any of the given
    /// `(vendor ID, product ID)` pairs
    pub fn count(hid: &hid::Api, ids: &[(u16, u16)]) -> usize {
        hid.device_list().filter(|dev| is_wire_interface(dev, ids)).count()
    }

    /// Function to get a handle of the device. Opens the first matching
    /// device; errors out if there is none or it cannot be accessed.
    pub fn get(hid: &hid::Api, ids: &[(u16, u16)]) -> Result<Trezor, Error> {
        let hid_dev = hid
            .device_list()
            .find(|dev| is_wire_interface(dev, ids))
            .ok_or(Error::DongleNotFound)?;
        info!(
            "opening device {:04x}:{:04x} ({})",
            hid_dev.vendor_id(),
            hid_dev.product_id(),
            hid_dev.product_string().unwrap_or("unknown product"),
        );
        Ok(Trezor {
            hid_dev: hid_dev.open_device(hid)?,
        })
    }
}

fn is_wire_interface(dev: &hidapi::DeviceInfo, ids: &[(u16, u16)]) -> bool {
    ids.iter()
        .any(|&(vid, pid)| dev.vendor_id() == vid && dev.product_id() == pid)
        && (dev.interface_number() == 0 || dev.usage_page() == constants::hid::WIRE_USAGE_PAGE)
}

/// Split a message into HID reports
fn encode_reports(msg_type: u16, mut payload: &[u8]) -> Result<Vec<Report>, Error> {
    if payload.len() > wire::MAX_MESSAGE_SIZE {
        return Err(Error::MessageTooLong(payload.len()));
    }

    let mut reports = vec![];
    let mut first = true;
    while first || !payload.is_empty() {
        let mut data_frame = [0u8; REPORT_SIZE];
        data_frame[0] = wire::REPORT_MAGIC;

        // First report's header includes the message type and length
        let header_len = if first {
            data_frame[1..3].copy_from_slice(&wire::HEADER_MAGIC);
            BigEndian::write_u16(&mut data_frame[3..5], msg_type);
            BigEndian::write_u32(
                &mut data_frame[5..9],
                u32::try_from(payload.len()).expect("length < MAX_MESSAGE_SIZE"),
            );
            wire::FIRST_HEADER_LEN
        } else {
            wire::CONT_HEADER_LEN
        };
        let chunk_len = cmp::min(payload.len(), REPORT_SIZE - header_len);
        data_frame[header_len..header_len + chunk_len].copy_from_slice(&payload[..chunk_len]);
        payload = &payload[chunk_len..];

        reports.push(data_frame);
        first = false;
    }
    Ok(reports)
}

/// Reassemble a message from a sequence of HID reports
fn assemble<F>(mut next_report: F) -> Result<(u16, Vec<u8>), Error>
where
    F: FnMut() -> Result<Report, Error>,
{
    let data_frame = next_report()?;
    check_magic(&data_frame)?;
    if data_frame[1..3] != wire::HEADER_MAGIC {
        return Err(Error::HeaderWrongMagic);
    }
    let msg_type = BigEndian::read_u16(&data_frame[3..5]);
    let receive_len = BigEndian::read_u32(&data_frame[5..9]) as usize;
    if receive_len > wire::MAX_MESSAGE_SIZE {
        return Err(Error::MessageTooLong(receive_len));
    }

    let mut ret = Vec::with_capacity(receive_len);
    let message_len = cmp::min(receive_len, REPORT_SIZE - wire::FIRST_HEADER_LEN);
    ret.extend(&data_frame[wire::FIRST_HEADER_LEN..wire::FIRST_HEADER_LEN + message_len]);

    while ret.len() < receive_len {
        let data_frame = next_report()?;
        check_magic(&data_frame)?;
        let message_len = cmp::min(receive_len - ret.len(), REPORT_SIZE - wire::CONT_HEADER_LEN);
        ret.extend(&data_frame[wire::CONT_HEADER_LEN..wire::CONT_HEADER_LEN + message_len]);
    }
    Ok((msg_type, ret))
}

fn check_magic(data_frame: &Report) -> Result<(), Error> {
    if data_frame[0] == wire::REPORT_MAGIC {
        Ok(())
    } else {
        Err(Error::ReportWrongMagic {
            expected: wire::REPORT_MAGIC,
            found: data_frame[0],
        })
    }
}

/// Write a single report to the device, prefixed by the (zero) report ID
fn write_report(hid_dev: &hid::Device, report: &Report) -> Result<(), hid::Error> {
    let mut buf = [0u8; REPORT_SIZE + 1];
    buf[1..].copy_from_slice(report);
    hid_dev.write(&buf[..])?;
    Ok(())
}

/// Read a single report from the device, blocking until it is complete
fn read_report(hid_dev: &hid::Device, timeout: Duration) -> Result<Report, Error> {
    let mut data_frame = [0u8; REPORT_SIZE];
    let mut frame_ptr = &mut data_frame[..];
    while !frame_ptr.is_empty() {
        let n_read_bytes = hid_dev.read_timeout(frame_ptr, timeout.as_millis() as i32)?;
        frame_ptr = &mut frame_ptr[n_read_bytes..];
    }
    Ok(data_frame)
}
