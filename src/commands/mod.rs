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

//! Command Parsing
//!
//! The commands understood by the console, and how their arguments turn
//! into requests
//!

mod changepin;
mod cipherkeyvalue;
mod clearsession;
mod getaddress;
mod getentropy;
mod getfeatures;
mod getpublickey;
mod ping;
mod sethomescreen;
mod setlabel;
mod signidentity;
mod signmessage;
mod verifymessage;

use hwshell::{util, Error, Request};
use miniscript::bitcoin::bip32;
use std::io::{self, Write};

pub trait Command {
    /// Number of arguments below which the command is refused
    const MIN_ARGS: usize;

    /// Build the request. Only called with at least `MIN_ARGS` arguments.
    fn request(args: &Args) -> Result<Request, Error>;
}

/// Positional arguments of a command, with the coercions commands use
pub struct Args<'a> {
    args: &'a [&'a str],
}

impl<'a> Args<'a> {
    pub fn new(args: &'a [&'a str]) -> Self {
        Args { args }
    }

    /// Argument `n`, which must exist
    pub fn get(&self, n: usize) -> &'a str {
        self.args[n]
    }

    pub fn string_or(&self, n: usize, default: &str) -> String {
        self.args.get(n).copied().unwrap_or(default).to_owned()
    }

    pub fn flag_or(&self, n: usize, default: bool) -> bool {
        self.args.get(n).map_or(default, |arg| util::parse_bool(arg))
    }

    pub fn int_or(&self, n: usize, default: u32) -> u32 {
        self.args.get(n).map_or(default, |arg| util::parse_int(arg))
    }

    /// Argument `n` and everything after it, joined by single spaces
    pub fn rest(&self, n: usize) -> String {
        self.args[n..].join(" ")
    }

    /// Argument `n` as a derivation path, validated
    pub fn path_or(&self, n: usize, default: &str) -> Result<bip32::DerivationPath, Error> {
        util::parse_path(self.args.get(n).copied().unwrap_or(default))
    }
}

/// What an input line amounts to
#[derive(Debug)]
pub enum Classified {
    /// A request ready to be sent
    Request(Request),
    /// A known command which was refused before reaching the device
    Rejected(Error),
    /// The `help` command
    Help,
    /// Not a command we know
    Unknown,
}

fn build<C: Command>(name: &'static str, args: &[&str]) -> Result<Request, Error> {
    if args.len() < C::MIN_ARGS {
        return Err(Error::MissingParameters {
            command: name,
            expected: C::MIN_ARGS,
            found: args.len(),
        });
    }
    C::request(&Args::new(args))
}

macro_rules! register_commands {
    ($($cmd_name:ident, $type_name:ident, $help:expr;)*) => {
        $(use $cmd_name::$type_name;)*

        /// Every registered command as (name, minimum arguments, synopsis)
        pub const COMMANDS: &[(&str, usize, &str)] = &[
            $((stringify!($cmd_name), <$type_name as Command>::MIN_ARGS, $help),)*
        ];

        /// Look up a command by (lowercase) name and build its request
        fn build_request(name: &str, args: &[&str]) -> Option<Result<Request, Error>> {
            match name {
                $(stringify!($cmd_name) => Some(build::<$type_name>(stringify!($cmd_name), args)),)*
                _ => None,
            }
        }
    }
}

register_commands! {
    ping, Ping, "<message> [pin_protect] [passphrase_protect] [button_protect]";
    signmessage, SignMessage, "<message...>";
    verifymessage, VerifyMessage, "<address> <base64 signature> <message>";
    getaddress, GetAddress, "[path] [show_display] [coin_name]";
    getentropy, GetEntropy, "<size>";
    setlabel, SetLabel, "<label...>";
    sethomescreen, SetHomescreen, "<image file>";
    getpublickey, GetPublicKey, "[path]";
    signidentity, SignIdentity, "<uri> <challenge_hidden> <challenge_visual> [index]";
    getfeatures, GetFeatures, "";
    clearsession, ClearSession, "";
    changepin, ChangePin, "";
    cipherkeyvalue, CipherKeyValue, "<encrypt> <key> <value> [path] [iv] [ask_on_encrypt] [ask_on_decrypt]";
}

/// Split a line into a command and its arguments and build its request
pub fn classify(line: &str) -> Classified {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().unwrap_or("").to_lowercase();
    let args: Vec<&str> = tokens.collect();

    if name == "help" {
        return Classified::Help;
    }
    match build_request(&name, &args) {
        Some(Ok(request)) => Classified::Request(request),
        Some(Err(e)) => Classified::Rejected(e),
        None => Classified::Unknown,
    }
}

/// Print the list of commands
pub fn usage<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    for &(name, _, help) in COMMANDS {
        writeln!(out, "    {:15} {}", name, help)?;
    }
    writeln!(out)?;
    writeln!(out, "Boolean arguments are true when given as 1 or true.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwshell::util::parse_path;

    fn request(line: &str) -> Request {
        match classify(line) {
            Classified::Request(req) => req,
            other => panic!("{:?} classified as {:?}", line, other),
        }
    }

    #[test]
    fn too_few_arguments() {
        for &(name, min_args, _) in COMMANDS {
            for n in 0..min_args {
                let line = format!("{} {}", name, vec!["x"; n].join(" "));
                match classify(&line) {
                    Classified::Rejected(Error::MissingParameters {
                        command,
                        expected,
                        found,
                    }) => {
                        assert_eq!(command, name);
                        assert_eq!(expected, min_args);
                        assert_eq!(found, n);
                    }
                    other => panic!("{:?} classified as {:?}", line, other),
                }
            }
        }
    }

    #[test]
    fn zero_argument_commands() {
        assert_eq!(request("getfeatures"), Request::GetFeatures);
        assert_eq!(request("clearsession"), Request::ClearSession);
        assert_eq!(request("changepin"), Request::ChangePin);
        // Extra arguments are ignored
        assert_eq!(request("getfeatures please"), Request::GetFeatures);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(request("GetFeatures"), Request::GetFeatures);
        assert_eq!(request("  CLEARSESSION  "), Request::ClearSession);
    }

    #[test]
    fn unknown_and_help() {
        assert!(matches!(classify("frobnicate 1 2"), Classified::Unknown));
        assert!(matches!(classify(""), Classified::Unknown));
        assert!(matches!(classify("1234"), Classified::Unknown));
        assert!(matches!(classify("HELP"), Classified::Help));
    }

    #[test]
    fn bad_paths_rejected() {
        for line in &[
            "getpublickey not-a-path",
            "getaddress 44/0/0",
            "getpublickey m/+5",
            "cipherkeyvalue 1 key value m/x",
        ] {
            assert!(
                matches!(classify(line), Classified::Rejected(Error::InvalidPath { .. })),
                "{:?} was not rejected",
                line,
            );
        }
    }

    #[test]
    fn registry_is_complete() {
        let names: Vec<&str> = COMMANDS.iter().map(|&(name, _, _)| name).collect();
        assert_eq!(names.len(), 13);
        for &(name, min_args, _) in COMMANDS {
            let expected = match name {
                "ping" | "signmessage" | "getentropy" | "setlabel" | "sethomescreen" => 1,
                "verifymessage" | "signidentity" | "cipherkeyvalue" => 3,
                _ => 0,
            };
            assert_eq!(min_args, expected, "{}", name);
        }
        assert_eq!(
            request("getpublickey"),
            Request::GetPublicKey {
                path: parse_path("m/44'/0'/0'").unwrap()
            }
        );
    }

    #[test]
    fn usage_lists_everything() {
        let mut out = vec![];
        usage(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        for &(name, _, _) in COMMANDS {
            assert!(out.contains(name));
        }
    }
}
