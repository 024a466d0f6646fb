use crate::mac::MacAddress;

pub const SYNC_STREAM: [u8; 6] = [ 0xff, 0xff, 0xff, 0xff, 0xff, 0xff ];
pub const MAC_REPETITIONS: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNC_STREAM.len() + MAC_REPETITIONS * 6;

/// Wake-on-LAN payload: six 0xff bytes followed by the target MAC sixteen times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn new(mac: &MacAddress) -> Self {
        let mut buf = [0u8; MAGIC_PACKET_LEN];
        buf[..SYNC_STREAM.len()].copy_from_slice(&SYNC_STREAM);
        for block in buf[SYNC_STREAM.len()..].chunks_exact_mut(6) {
            block.copy_from_slice(mac.as_bytes());
        }
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the MAC a payload would wake, or `None` if it is not a magic packet.
    ///
    /// Trailing bytes after the sixteenth repetition (e.g. a SecureOn password) are ignored.
    pub fn target_of(payload: &[u8]) -> Option<MacAddress> {
        if payload.len() < MAGIC_PACKET_LEN { return None; }

        let blocks: Vec<&[u8]> = payload[..MAGIC_PACKET_LEN].chunks(6).collect();
        if blocks[0] != SYNC_STREAM {
            return None;
        }

        if blocks[2..].iter().any(|block| *block != blocks[1]) {
            return None;
        }

        let mut mac = [0u8; 6];
        mac.copy_from_slice(blocks[1]);
        Some(MacAddress::new(mac))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: MacAddress = MacAddress::new([ 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff ]);

    #[test]
    fn layout() {
        let pkt = MagicPacket::new(&MAC);
        let bytes = pkt.as_bytes();

        assert_eq!(bytes.len(), 102);
        assert_eq!(&bytes[..6], &[0xff; 6]);
        assert_eq!(&bytes[6..12], MAC.as_bytes());
        assert_eq!(&bytes[96..], MAC.as_bytes());
        for i in 0..MAC_REPETITIONS {
            assert_eq!(&bytes[6 + 6 * i..12 + 6 * i], MAC.as_bytes());
        }
    }

    #[test]
    fn deterministic() {
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
        assert_eq!(MagicPacket::new(&mac), MagicPacket::new(&mac));
        assert_ne!(MagicPacket::new(&mac), MagicPacket::new(&MAC));
    }

    #[test]
    fn recognises_own_output() {
        let pkt = MagicPacket::new(&MAC);
        assert_eq!(MagicPacket::target_of(pkt.as_bytes()), Some(MAC));

        let mut with_password = pkt.as_bytes().to_vec();
        with_password.extend_from_slice(&[ 1, 2, 3, 4, 5, 6 ]);
        assert_eq!(MagicPacket::target_of(&with_password), Some(MAC));
    }

    #[test]
    fn rejects_other_payloads() {
        let pkt = MagicPacket::new(&MAC);
        assert_eq!(MagicPacket::target_of(&pkt.as_bytes()[..101]), None);

        let mut bad_sync = pkt.as_bytes().to_vec();
        bad_sync[0] = 0x00;
        assert_eq!(MagicPacket::target_of(&bad_sync), None);

        let mut bad_repeat = pkt.as_bytes().to_vec();
        bad_repeat[100] = 0x00;
        assert_eq!(MagicPacket::target_of(&bad_repeat), None);
    }
}
