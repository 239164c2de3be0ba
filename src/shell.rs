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

//! Interactive Console
//!
//! Reads a line at a time and turns it into a request for the device.
//! Some replies are not final: a PIN challenge makes the *next* line the
//! PIN, and a button request is acknowledged straight away so the device
//! can wait for the user's confirmation.
//!

use crate::commands::{self, Classified};
use hwshell::{Dongle, Request, Response};
use log::{debug, error};
use std::io::{self, BufRead, Write};

/// How the next input line is interpreted
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SessionMode {
    /// The line is a command
    Normal,
    /// The device asked for a PIN; the line is the reply, verbatim
    AwaitingPinDigits,
}

/// The console, holding the device for as long as it runs
pub struct Shell<'d, D: Dongle> {
    dongle: &'d mut D,
    mode: SessionMode,
    prompt: String,
}

impl<'d, D: Dongle> Shell<'d, D> {
    /// Constructor
    pub fn new(dongle: &'d mut D, prompt: &str) -> Self {
        Shell {
            dongle,
            mode: SessionMode::Normal,
            prompt: prompt.to_owned(),
        }
    }

    /// Run until the input ends or cannot be read
    ///
    /// Lines need not be UTF-8; invalid bytes are replaced rather than
    /// ending the session. Only errors writing to `output` are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = vec![];
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("end of input");
                    writeln!(output)?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    writeln!(output, "ERR {}", e)?;
                    return Ok(());
                }
            }
            let line = String::from_utf8_lossy(&buf);
            self.step(line.trim_end_matches(&['\r', '\n'][..]), &mut output)?;
        }
    }

    /// Handle a single input line
    fn step<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        let response = match self.mode {
            SessionMode::AwaitingPinDigits => {
                self.set_mode(SessionMode::Normal);
                self.submit(&Request::PinMatrixAck { pin: line.to_owned() }, out)?
            }
            SessionMode::Normal => match commands::classify(line) {
                Classified::Request(request) => self.submit(&request, out)?,
                Classified::Rejected(e) => {
                    debug!("refused locally: {}", e);
                    writeln!(out, "{}", e)?;
                    None
                }
                Classified::Help => {
                    commands::usage(&mut *out)?;
                    None
                }
                Classified::Unknown => {
                    writeln!(out, "Unknown command")?;
                    Some(Response::unrecognized(line))
                }
            },
        };

        if let Some(response) = response {
            self.show(&response, out)?;
            if response.is_button_request() {
                // Exactly one acknowledgement. Whatever comes back, including
                // another button request, is only displayed.
                if let Some(ack) = self.submit(&Request::ButtonAck, out)? {
                    self.show(&ack, out)?;
                }
            }
        }
        Ok(())
    }

    /// Send a request. Device errors are reported and swallowed.
    fn submit<W: Write>(&mut self, request: &Request, out: &mut W) -> io::Result<Option<Response>> {
        match self.dongle.call(request) {
            Ok(response) => Ok(Some(response)),
            Err(e) => {
                error!("exchange with device failed: {:?}", e);
                writeln!(out, "device error: {}", e)?;
                Ok(None)
            }
        }
    }

    /// Display a response and arm the PIN prompt if it asks for one
    fn show<W: Write>(&mut self, response: &Response, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {}", response.text, response.kind)?;
        if response.is_pin_request() {
            self.set_mode(SessionMode::AwaitingPinDigits);
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: SessionMode) {
        if self.mode != mode {
            debug!("session mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwshell::constants::message_type as mt;
    use hwshell::util::parse_path;
    use hwshell::Error;
    use std::collections::VecDeque;

    /// Scripted device: replies in order and remembers every request
    #[derive(Default)]
    struct Script {
        sent: Vec<Request>,
        replies: VecDeque<Result<Response, Error>>,
    }

    impl Script {
        fn new(replies: Vec<Response>) -> Self {
            Script {
                sent: vec![],
                replies: replies.into_iter().map(Ok).collect(),
            }
        }
    }

    impl Dongle for Script {
        fn exchange(&mut self, _: u16, _: &[u8]) -> Result<(u16, Vec<u8>), Error> {
            unreachable!("requests go through call")
        }

        fn call(&mut self, request: &Request) -> Result<Response, Error> {
            self.sent.push(request.clone());
            self.replies
                .pop_front()
                .unwrap_or_else(|| Ok(Response::new("ok", mt::SUCCESS)))
        }
    }

    fn pin_request() -> Response {
        Response::new("Please enter current PIN:", mt::PIN_MATRIX_REQUEST)
    }

    fn button_request() -> Response {
        Response::new("Confirm action on the device", mt::BUTTON_REQUEST)
    }

    /// Feed lines one by one, returning the output
    fn feed<D: Dongle>(shell: &mut Shell<D>, lines: &[&str]) -> String {
        let mut out = vec![];
        for line in lines {
            shell.step(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ping_scenario() {
        let mut dongle = Script::new(vec![Response::new("hello", mt::SUCCESS)]);
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(&mut shell, &["ping hello 1 0 0"]);
        assert_eq!(out, "hello 2\n");
        assert_eq!(shell.mode, SessionMode::Normal);
        assert_eq!(
            dongle.sent,
            vec![Request::Ping {
                message: "hello".to_owned(),
                pin_protection: true,
                passphrase_protection: false,
                button_protection: false,
            }],
        );
    }

    #[test]
    fn getaddress_defaults() {
        let mut dongle = Script::default();
        feed(&mut Shell::new(&mut dongle, ">"), &["getaddress"]);
        assert_eq!(
            dongle.sent,
            vec![Request::GetAddress {
                path: parse_path("m/44'/0'/0'").unwrap(),
                show_display: false,
                coin_name: "Bitcoin".to_owned(),
            }],
        );
    }

    #[test]
    fn pin_reply_is_verbatim() {
        let mut dongle = Script::new(vec![pin_request(), Response::new("xpub123", mt::PUBLIC_KEY)]);
        let mut shell = Shell::new(&mut dongle, ">");

        let out = feed(&mut shell, &["getpublickey m/44'/0'/0'"]);
        assert_eq!(out, "Please enter current PIN: 18\n");
        assert_eq!(shell.mode, SessionMode::AwaitingPinDigits);

        let out = feed(&mut shell, &["1234"]);
        assert_eq!(out, "xpub123 12\n");
        assert_eq!(shell.mode, SessionMode::Normal);

        assert_eq!(
            dongle.sent,
            vec![
                Request::GetPublicKey {
                    path: parse_path("m/44'/0'/0'").unwrap()
                },
                Request::PinMatrixAck {
                    pin: "1234".to_owned()
                },
            ],
        );
    }

    #[test]
    fn pin_reply_shadows_commands() {
        let mut dongle = Script::new(vec![pin_request()]);
        let mut shell = Shell::new(&mut dongle, ">");
        feed(&mut shell, &["getfeatures", "ping  hello 1", "getfeatures"]);
        assert_eq!(shell.mode, SessionMode::Normal);
        assert_eq!(
            dongle.sent,
            vec![
                Request::GetFeatures,
                Request::PinMatrixAck {
                    pin: "ping  hello 1".to_owned()
                },
                Request::GetFeatures,
            ],
        );
    }

    #[test]
    fn mode_resets_even_if_pin_reply_fails() {
        let mut dongle = Script::new(vec![pin_request()]);
        dongle.replies.push_back(Err(Error::UnexpectedEof));
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(&mut shell, &["getfeatures", "9999"]);
        assert!(out.ends_with("device error: unexpected end-of-data\n"));
        assert_eq!(shell.mode, SessionMode::Normal);
    }

    #[test]
    fn repeated_pin_challenges() {
        // Changing the PIN asks for the new one twice
        let mut dongle = Script::new(vec![
            pin_request(),
            Response::new("Please enter new PIN:", mt::PIN_MATRIX_REQUEST),
            Response::new("Please re-enter new PIN:", mt::PIN_MATRIX_REQUEST),
            Response::new("PIN changed", mt::SUCCESS),
        ]);
        let mut shell = Shell::new(&mut dongle, ">");
        feed(&mut shell, &["changepin", "1", "2", "3", "getfeatures"]);
        assert_eq!(shell.mode, SessionMode::Normal);
        assert_eq!(dongle.sent.len(), 5);
        assert_eq!(dongle.sent[3], Request::PinMatrixAck { pin: "3".to_owned() });
        assert_eq!(dongle.sent[4], Request::GetFeatures);
    }

    #[test]
    fn button_request_is_acked_once() {
        let mut dongle = Script::new(vec![button_request(), Response::new("PIN removed", mt::SUCCESS)]);
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(&mut shell, &["changepin"]);
        assert_eq!(out, "Confirm action on the device 26\nPIN removed 2\n");
        assert_eq!(dongle.sent, vec![Request::ChangePin, Request::ButtonAck]);
    }

    #[test]
    fn button_follow_up_is_not_repeated() {
        let mut dongle = Script::new(vec![button_request(), button_request()]);
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(&mut shell, &["setlabel my wallet"]);
        assert_eq!(out, "Confirm action on the device 26\nConfirm action on the device 26\n");
        assert_eq!(shell.mode, SessionMode::Normal);
        assert_eq!(
            dongle.sent,
            vec![
                Request::SetLabel {
                    label: "my wallet".to_owned()
                },
                Request::ButtonAck,
            ],
        );
    }

    #[test]
    fn button_then_pin() {
        let mut dongle = Script::new(vec![button_request(), pin_request()]);
        let mut shell = Shell::new(&mut dongle, ">");
        feed(&mut shell, &["changepin"]);
        assert_eq!(shell.mode, SessionMode::AwaitingPinDigits);
        feed(&mut shell, &["5"]);
        assert_eq!(
            dongle.sent,
            vec![
                Request::ChangePin,
                Request::ButtonAck,
                Request::PinMatrixAck { pin: "5".to_owned() },
            ],
        );
    }

    #[test]
    fn local_failures_never_reach_the_device() {
        let mut dongle = Script::default();
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(
            &mut shell,
            &[
                "ping",
                "getpublickey not-a-path",
                "cipherkeyvalue 1 k v nope",
                "verifymessage a b",
                "sethomescreen /nonexistent/hwshell/image.bin",
            ],
        );
        assert_eq!(shell.mode, SessionMode::Normal);
        assert!(out.starts_with("missing parameters for ping (expected at least 1, found 0)\n"));
        assert!(out.contains("invalid BIP32 path \"not-a-path\""));
        assert!(out.contains("error reading image"));
        assert!(dongle.sent.is_empty());
    }

    #[test]
    fn malformed_command_is_a_pin_while_waiting() {
        let mut dongle = Script::new(vec![pin_request()]);
        let mut shell = Shell::new(&mut dongle, ">");
        feed(&mut shell, &["getfeatures"]);
        // While a PIN is pending even a malformed command is the PIN
        feed(&mut shell, &["ping"]);
        assert_eq!(dongle.sent[1], Request::PinMatrixAck { pin: "ping".to_owned() });
    }

    #[test]
    fn unknown_command() {
        let mut dongle = Script::default();
        let mut shell = Shell::new(&mut dongle, ">");
        let out = feed(&mut shell, &["frobnicate the device"]);
        assert_eq!(out, "Unknown command\nfrobnicate the device 999\n");
        assert_eq!(shell.mode, SessionMode::Normal);
        assert!(dongle.sent.is_empty());
    }

    #[test]
    fn run_until_end_of_input() {
        let mut dongle = Script::new(vec![pin_request()]);
        let mut shell = Shell::new(&mut dongle, "$ ");
        let input: &[u8] = b"getfeatures\r\n1234\nhelp\n";
        let mut out = vec![];
        shell.run(input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("$ Please enter current PIN: 18\n$ ok 2\n$ Commands:\n"));
        assert!(out.ends_with("$ \n"));
        assert_eq!(
            dongle.sent,
            vec![
                Request::GetFeatures,
                Request::PinMatrixAck {
                    pin: "1234".to_owned()
                },
            ],
        );
    }

    #[test]
    fn run_survives_invalid_utf8() {
        let mut dongle = Script::default();
        let input: &[u8] = b"getfeatures\n\xff\xfe\ngetfeatures\n";
        let mut out = vec![];
        Shell::new(&mut dongle, ">").run(input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(">Unknown command\n\u{fffd}\u{fffd} 999\n"));
        assert_eq!(dongle.sent, vec![Request::GetFeatures, Request::GetFeatures]);
    }

    #[test]
    fn run_stops_on_read_error() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "interrupted by user"))
            }
        }

        let mut dongle = Script::default();
        let mut out = vec![];
        Shell::new(&mut dongle, ">")
            .run(io::BufReader::new(Broken), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">ERR interrupted by user\n");
        assert!(dongle.sent.is_empty());
    }
}
