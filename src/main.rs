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

//! # hwshell
//!
//! Interactive console for a TREZOR-style hardware wallet. Type a command
//! per line (`help` lists them); when the device asks for a PIN, the next
//! line is sent as the PIN, and button requests are acknowledged for you
//! so you can confirm on the device.
//!

mod commands;
mod config;
mod shell;

use anyhow::Context;
use hwshell::{hid, Trezor};
use log::{info, warn};
use std::io;

use crate::config::Config;
use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load().context("loading configuration")?;
    let ids = config.device_ids();

    let hid = hid::Api::new().context("initializing hidapi")?;
    let n_devices = Trezor::count(&hid, &ids);
    if n_devices == 0 {
        println!("No TREZOR devices found, make sure your device is connected");
        return Ok(());
    }
    println!("Found {} TREZOR devices connected", n_devices);
    if n_devices > 1 {
        warn!("more than one device connected, using the first one");
    }

    // The HID handle closes when `dongle` goes out of scope, on every path
    let mut dongle = Trezor::get(&hid, &ids).context("opening device")?;
    info!("device open, starting console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut dongle, &config.prompt)
        .run(stdin.lock(), stdout.lock())
        .context("writing to stdout")?;
    Ok(())
}
