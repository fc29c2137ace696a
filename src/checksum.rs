use crate::answers::{ResponseHeader, ResponseParam, ScanPacket};

/// Checksum of a header or param response, computed from its two status bytes.
///
/// `((status[0] + status[1]) & 0x3F) + 0x30`, which always lands in the
/// printable range `0x30..=0x6F`.
#[inline]
pub fn status_checksum(status: [u8; 2]) -> u8 {
    (status[0].wrapping_add(status[1]) & 0x3F) + 0x30
}

#[inline]
pub fn checksum_response_header(header: &ResponseHeader) -> u8 {
    status_checksum(header.status)
}

#[inline]
pub fn checksum_response_param(param: &ResponseParam) -> u8 {
    status_checksum(param.status)
}

/// Checksum of a scan record: weighted sum of its data fields, modulo 15.
pub fn checksum_response_scan_packet(packet: &ScanPacket) -> u8 {
    let mut sum: u32 = 0;
    sum += ((packet.distance_low as u32) << 3)
        + ((packet.vhl as u32) << 2)
        + ((packet.s2 as u32) << 1)
        + packet.s1 as u32;
    sum += packet.distance_high as u32;
    sum += (packet.angle & 0x00FF) as u32;
    sum += (packet.angle >> 8) as u32;
    sum += (packet.vrect as u32) << 4;
    (sum % 15) as u8
}

/// Whether the transmitted scan checksum matches the computed one.
#[inline]
pub fn scan_checksum_matches(packet: &ScanPacket) -> bool {
    checksum_response_scan_packet(packet) == packet.checksum
}

/// Whether the sync bits mark a genuine record start (`s1 == 1`, `s2 == 0`).
#[inline]
pub fn scan_sync_bits_valid(packet: &ScanPacket) -> bool {
    packet.s1 == 1 && packet.s2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Decode;

    #[test]
    fn status_checksum_formula() {
        assert_eq!(status_checksum(*b"00"), b'P');
        // (0x31 + 0x32) & 0x3F = 0x23
        assert_eq!(status_checksum(*b"12"), 0x53);
        // wraps instead of overflowing
        assert_eq!(status_checksum([0xFF, 0x02]), 0x31);
        for a in 0..=255u8 {
            for b in [0u8, 0x30, 0x7F, 0xFF] {
                let sum = status_checksum([a, b]);
                assert!((0x30..=0x6F).contains(&sum));
            }
        }
    }

    #[test]
    fn scan_checksum_formula() {
        // head 0x51: s1=1 s2=0 vhl=0 distance_low=10
        let packet = ScanPacket::decode(&[0x51, 0x02, 0x10, 0x01, 0x03]);
        let expected = ((10u32 << 3) + 1 + 0x02 + 0x10 + 0x01 + (3 << 4)) % 15;
        assert_eq!(checksum_response_scan_packet(&packet) as u32, expected);
    }

    #[test]
    fn checksum_equals_head_byte_weighting() {
        // weighted bit fields of byte 0 add back up to the byte itself
        for head in 0..=255u8 {
            let packet = ScanPacket::decode(&[head, 0, 0, 0, 0]);
            assert_eq!(checksum_response_scan_packet(&packet), head % 15);
        }
    }

    #[test]
    fn sync_bits_are_a_separate_check() {
        // 0x03: s1=1 s2=1, checksum 3 % 15 = 3 matches the transmitted nibble
        let packet = ScanPacket::decode(&[0x03, 0x00, 0x00, 0x00, 0x30]);
        assert!(scan_checksum_matches(&packet));
        assert!(!scan_sync_bits_valid(&packet));

        // 0x00: s1=0 s2=0, checksum 0
        let packet = ScanPacket::decode(&[0x00, 0x00, 0x00, 0x00, 0x00]);
        assert!(scan_checksum_matches(&packet));
        assert!(!scan_sync_bits_valid(&packet));

        let packet = ScanPacket::decode(&[0x01, 0x00, 0x00, 0x00, 0x10]);
        assert!(scan_checksum_matches(&packet));
        assert!(scan_sync_bits_valid(&packet));
    }
}
