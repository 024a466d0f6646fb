use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use wol_send::config::DEFAULT_CONFIG_PATH;
use wol_send::sender::{DEFAULT_TARGET_IP, DEFAULT_WOL_PORT};

/// Send a Wake-on-LAN magic packet over UDP
#[derive(Parser, Debug)]
#[command(name = "wol-send", version, about, long_about = None)]
pub struct Cli {
    /// MAC address of the machine to wake (AA:BB:.., AA-BB-.., AABB.CCDD.EEFF or AABBCCDDEEFF)
    #[arg(short, long, env = "TARGET_MAC")]
    pub mac: Option<String>,

    /// Destination IPv4 address, usually a broadcast address
    #[arg(short, long, env = "TARGET_IP", default_value = DEFAULT_TARGET_IP)]
    pub ip: String,

    /// Destination UDP port (commonly 9, 7 or 0)
    #[arg(short, long, env = "WOL_PORT", default_value_t = DEFAULT_WOL_PORT)]
    pub port: u16,

    /// Send to the subnet broadcast address of this interface instead of --ip.
    /// Overrides TARGET_IP from the environment
    #[arg(short = 'I', long)]
    pub interface: Option<String>,

    /// Target list file
    #[arg(short, long, env = "WOL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Wake a target from the target list by name; may be repeated. Takes precedence over --mac
    #[arg(short, long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// List the configured targets and exit
    #[arg(short, long, default_value_t = false)]
    pub list: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses the process arguments, exiting with a usage error on failure.
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like [`Parser::try_parse_from`], but only a `--ip` given on the command line
    /// conflicts with `--interface`; `TARGET_IP` from the environment is overridden.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(args)?;
        let cli = Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))?;

        if cli.interface.is_some() && matches.value_source("ip") == Some(ValueSource::CommandLine) {
            return Err(cmd.error(
                ErrorKind::ArgumentConflict,
                "the argument '--interface <INTERFACE>' cannot be used with '--ip <IP>'",
            ));
        }

        Ok(cli)
    }

    pub fn config_path(&self) -> PathBuf {
        wol_send::config::expand_path(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_args_from([ "wol-send", "--mac", "00:11:22:33:44:55", "--ip", "10.0.0.255", "-p", "7" ]).unwrap();
        assert_eq!(cli.mac.as_deref(), Some("00:11:22:33:44:55"));
        assert_eq!(cli.ip, "10.0.0.255");
        assert_eq!(cli.port, 7);
    }

    #[test]
    fn port_out_of_range() {
        assert!(Cli::try_parse_args_from([ "wol-send", "--mac", "001122334455", "--port", "65536" ]).is_err());
        assert!(Cli::try_parse_args_from([ "wol-send", "--mac", "001122334455", "--port", "0" ]).is_ok());
    }

    #[test]
    fn repeated_targets() {
        let cli = Cli::try_parse_args_from([ "wol-send", "-t", "nas", "-t", "desktop", "-vv" ]).unwrap();
        assert_eq!(cli.targets, vec![ "nas", "desktop" ]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn interface_conflicts_with_ip() {
        let err = Cli::try_parse_args_from([ "wol-send", "--ip", "10.0.0.255", "-I", "eth0" ]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let cli = Cli::try_parse_args_from([ "wol-send", "-I", "eth0" ]).unwrap();
        assert_eq!(cli.interface.as_deref(), Some("eth0"));
    }
}
