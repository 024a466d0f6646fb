use std::fmt;
use std::io;
use std::net::{AddrParseError, Ipv4Addr, SocketAddrV4, UdpSocket};

use thiserror::Error;

pub const DEFAULT_TARGET_IP: &str = "255.255.255.255";
pub const DEFAULT_WOL_PORT: u16 = 9;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("invalid target address '{addr}': {source}")]
    AddressParseFailed {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("unable to create UDP socket: {0}")]
    SocketCreationFailed(#[source] io::Error),

    #[error("unable to enable broadcast on socket: {0}")]
    BroadcastEnableFailed(#[source] io::Error),

    #[error("sending to {target} failed: {source}")]
    SendFailed {
        target: SocketAddrV4,
        #[source]
        source: io::Error,
    },
}

/// Where a magic packet goes. The address is kept as given and only parsed when sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEndpoint {
    pub ip: String,
    pub port: u16,
}

impl TargetEndpoint {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self { ip: ip.into(), port }
    }

    pub fn socket_addr(&self) -> Result<SocketAddrV4, SendError> {
        let ip: Ipv4Addr = self.ip.trim().parse().map_err(|source| SendError::AddressParseFailed {
            addr: self.ip.clone(),
            source,
        })?;
        Ok(SocketAddrV4::new(ip, self.port))
    }
}

impl Default for TargetEndpoint {
    fn default() -> Self {
        Self {
            ip: DEFAULT_TARGET_IP.to_string(),
            port: DEFAULT_WOL_PORT,
        }
    }
}

impl fmt::Display for TargetEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// Anything that can hand a payload to the network once.
pub trait WakeOnLanSender {
    /// Sends `payload` as a single datagram and returns the number of bytes handed to the OS.
    fn send(&self, payload: &[u8], endpoint: &TargetEndpoint) -> Result<usize, SendError>;
}

/// Sends over a fresh IPv4 UDP socket per call, with SO_BROADCAST enabled.
#[derive(Debug, Clone)]
pub struct UdpSender {
    bind_addr: SocketAddrV4,
}

impl UdpSender {
    pub fn new() -> Self {
        Self { bind_addr: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0) }
    }
}

impl Default for UdpSender {
    fn default() -> Self {
        Self::new()
    }
}

impl WakeOnLanSender for UdpSender {
    fn send(&self, payload: &[u8], endpoint: &TargetEndpoint) -> Result<usize, SendError> {
        debug_assert!(!payload.is_empty());

        let target = endpoint.socket_addr()?;

        // socket is closed when it goes out of scope, on every path below
        let socket = UdpSocket::bind(self.bind_addr).map_err(SendError::SocketCreationFailed)?;
        log::trace!("bound UDP socket to {}", self.bind_addr);

        socket.set_broadcast(true).map_err(SendError::BroadcastEnableFailed)?;
        log::trace!("enabled broadcast on socket");

        let sent = socket
            .send_to(payload, target)
            .map_err(|source| SendError::SendFailed { target, source })?;
        log::debug!("sent {} of {} bytes to {}", sent, payload.len(), target);

        Ok(sent)
    }
}
