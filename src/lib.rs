//! Wake-on-LAN magic packet sender.
//!
//! [`mac`] turns user input into a [`MacAddress`], [`packet`] lays out the 102-byte
//! [`MagicPacket`], and a [`WakeOnLanSender`] puts it on the wire. [`wake()`] chains the
//! three for a single fire-once invocation.

pub mod config;
pub mod error;
pub mod iface;
pub mod mac;
pub mod packet;
pub mod sender;
mod wake;

pub use error::WolError;
pub use mac::{MacAddress, MacError};
pub use packet::MagicPacket;
pub use sender::{SendError, TargetEndpoint, UdpSender, WakeOnLanSender};
pub use wake::{wake, wake_mac, WakeReport};
