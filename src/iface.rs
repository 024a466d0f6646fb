use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use crate::error::WolError;

/// First IPv4 subnet broadcast address configured on `iface`.
pub fn subnet_broadcast(iface: &NetworkInterface) -> Option<Ipv4Addr> {
    iface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) => Some(v4.broadcast()),
        IpNetwork::V6(_) => None,
    })
}

/// Looks up the interface by name and returns its subnet broadcast address.
pub fn broadcast_for(name: &str) -> Result<Ipv4Addr, WolError> {
    let iface = datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| WolError::NoBroadcastAddress(name.to_string()))?;

    if !iface.is_up() {
        log::warn!("interface '{}' is down", iface.name);
    }

    let addr = subnet_broadcast(&iface).ok_or_else(|| WolError::NoBroadcastAddress(name.to_string()))?;
    log::debug!("using broadcast address {} of interface '{}'", addr, iface.name);
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::ipnetwork::{Ipv4Network, Ipv6Network};
    use std::net::Ipv6Addr;

    fn iface(ips: Vec<IpNetwork>) -> NetworkInterface {
        NetworkInterface {
            name: "test0".into(),
            description: String::new(),
            index: 1,
            mac: None,
            ips,
            flags: 0,
        }
    }

    #[test]
    fn picks_first_ipv4_network() {
        let ips = vec![
            IpNetwork::V6(Ipv6Network::new(Ipv6Addr::LOCALHOST, 128).unwrap()),
            IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(192, 168, 1, 20), 24).unwrap()),
            IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(10, 0, 0, 5), 8).unwrap()),
        ];
        assert_eq!(subnet_broadcast(&iface(ips)), Some(Ipv4Addr::new(192, 168, 1, 255)));
    }

    #[test]
    fn no_ipv4_network() {
        let ips = vec![ IpNetwork::V6(Ipv6Network::new(Ipv6Addr::LOCALHOST, 128).unwrap()) ];
        assert_eq!(subnet_broadcast(&iface(ips)), None);
        assert_eq!(subnet_broadcast(&iface(vec![])), None);
    }

    #[test]
    fn unknown_interface() {
        let err = broadcast_for("no-such-iface-0").unwrap_err();
        assert!(matches!(err, WolError::NoBroadcastAddress(ref n) if n == "no-such-iface-0"));
    }
}
