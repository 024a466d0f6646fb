use std::fmt;

use crate::error::WolError;
use crate::mac::MacAddress;
use crate::packet::MagicPacket;
use crate::sender::{TargetEndpoint, WakeOnLanSender};

/// Outcome of one successful wake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeReport {
    pub mac: MacAddress,
    pub endpoint: TargetEndpoint,
    pub bytes_sent: usize,
}

impl fmt::Display for WakeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sent {} bytes for {} to {}", self.bytes_sent, self.mac, self.endpoint)
    }
}

/// Validates `raw_mac`, builds the magic packet and sends it once.
///
/// Nothing touches the network unless the MAC and the target address are both valid.
pub fn wake<S>(raw_mac: &str, endpoint: &TargetEndpoint, sender: &S) -> Result<WakeReport, WolError>
where
    S: WakeOnLanSender + ?Sized,
{
    log::trace!("validating MAC '{}'", raw_mac);
    let mac = MacAddress::normalize(raw_mac)?;
    endpoint.socket_addr()?;

    wake_mac(&mac, endpoint, sender)
}

/// Like [`wake`], for an already validated MAC.
pub fn wake_mac<S>(mac: &MacAddress, endpoint: &TargetEndpoint, sender: &S) -> Result<WakeReport, WolError>
where
    S: WakeOnLanSender + ?Sized,
{
    log::trace!("building magic packet for {}", mac);
    let packet = MagicPacket::new(mac);

    log::debug!("sending magic packet for {} to {}", mac, endpoint);
    let payload = packet.as_bytes();
    let sent = sender.send(payload, endpoint)?;
    if sent != payload.len() {
        return Err(WolError::ShortSend { sent, expected: payload.len() });
    }

    Ok(WakeReport {
        mac: *mac,
        endpoint: endpoint.clone(),
        bytes_sent: sent,
    })
}
