use crate::base::Decode;
use crate::cmds::CommandCode;
use crate::internals::*;
use crate::utils::parse_ascii_digits;
use byteorder::{ByteOrder, LittleEndian};

/// Acknowledgement of a bare command: `cmd[0] cmd[1] status[0] status[1] sum`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Echo of the command this response answers.
    pub cmd: CommandCode,
    /// Raw status bytes as transmitted.
    pub status: [u8; 2],
    /// Transmitted checksum over the status bytes.
    pub checksum: u8,
}

impl ResponseHeader {
    /// Status bytes, unmodified.
    pub fn status(&self) -> [u8; 2] {
        self.status
    }

    /// Status as a two-digit decimal, if both bytes are ASCII digits.
    pub fn status_code(&self) -> Option<u8> {
        parse_ascii_digits(self.status)
    }
}

impl Decode for ResponseHeader {
    const SIZE: usize = RESPONSE_HEADER_SIZE;

    fn decode(bytes: &[u8]) -> Self {
        ResponseHeader {
            cmd: [bytes[0], bytes[1]],
            status: [bytes[2], bytes[3]],
            checksum: bytes[4],
        }
    }
}

/// Acknowledgement of a command with argument:
/// `cmd[0] cmd[1] arg[0] arg[1] status[0] status[1] sum`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResponseParam {
    /// Echo of the command this response answers.
    pub cmd: CommandCode,
    /// Echo of the argument. Not validated.
    pub arg: [u8; 2],
    /// Raw status bytes as transmitted.
    pub status: [u8; 2],
    /// Transmitted checksum over the status bytes.
    pub checksum: u8,
}

impl ResponseParam {
    /// Status bytes, unmodified.
    pub fn status(&self) -> [u8; 2] {
        self.status
    }

    /// Status as a two-digit decimal, if both bytes are ASCII digits.
    pub fn status_code(&self) -> Option<u8> {
        parse_ascii_digits(self.status)
    }
}

impl Decode for ResponseParam {
    const SIZE: usize = RESPONSE_PARAM_SIZE;

    fn decode(bytes: &[u8]) -> Self {
        ResponseParam {
            cmd: [bytes[0], bytes[1]],
            arg: [bytes[2], bytes[3]],
            status: [bytes[4], bytes[5]],
            checksum: bytes[6],
        }
    }
}

/// One range measurement from the scan stream.
///
/// Wire layout (5 bytes):
///
/// ```text
/// byte 0: bit 0 s1 | bit 1 s2 | bit 2 VHL | bits 3..7 distance_low
/// byte 1: distance_high
/// byte 2..3: angle (little endian)
/// byte 4: bits 0..3 VRECT | bits 4..7 checksum
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScanPacket {
    /// Sync bit, set on a genuine record start.
    pub s1: u8,
    /// Inverted sync bit, clear on a genuine record start.
    pub s2: u8,
    /// Signal strength flag.
    pub vhl: u8,
    /// Low 5 bits of the distance.
    pub distance_low: u8,
    /// High 8 bits of the distance.
    pub distance_high: u8,
    /// Raw mirror angle.
    pub angle: u16,
    /// 4-bit VRECT value.
    pub vrect: u8,
    /// Transmitted 4-bit checksum.
    pub checksum: u8,
}

/// Mask for the `s1` sync bit in the first record byte.
pub const SCAN_SYNC_BIT_S1: u8 = 0x01;
/// Mask for the `s2` sync bit in the first record byte.
pub const SCAN_SYNC_BIT_S2: u8 = 0x02;
/// Mask for the strength flag in the first record byte.
pub const SCAN_VHL_BIT: u8 = 0x04;
/// Bit shift of `distance_low` in the first record byte.
pub const SCAN_DISTANCE_LOW_SHIFT: usize = 3;

impl ScanPacket {
    /// Full 13-bit raw distance, `distance_high:distance_low`.
    #[inline]
    pub fn distance(&self) -> u16 {
        ((self.distance_high as u16) << 5) | self.distance_low as u16
    }

    /// Raw mirror angle.
    #[inline]
    pub fn angle(&self) -> u16 {
        self.angle
    }

    #[inline]
    pub fn vrect(&self) -> u8 {
        self.vrect
    }

    /// Whether the `s1` sync bit is set.
    #[inline]
    pub fn is_sync(&self) -> bool {
        self.s1 == 1
    }

    /// Whether the strength flag is set.
    #[inline]
    pub fn is_high_strength(&self) -> bool {
        self.vhl == 1
    }

    /// The first wire byte, reassembled from its bit fields.
    #[inline]
    pub fn first_byte(&self) -> u8 {
        (self.distance_low << SCAN_DISTANCE_LOW_SHIFT)
            | (self.vhl << 2)
            | (self.s2 << 1)
            | self.s1
    }
}

impl Decode for ScanPacket {
    const SIZE: usize = SCAN_PACKET_SIZE;

    fn decode(bytes: &[u8]) -> Self {
        let head = bytes[0];
        ScanPacket {
            s1: head & SCAN_SYNC_BIT_S1,
            s2: (head & SCAN_SYNC_BIT_S2) >> 1,
            vhl: (head & SCAN_VHL_BIT) >> 2,
            distance_low: head >> SCAN_DISTANCE_LOW_SHIFT,
            distance_high: bytes[1],
            angle: LittleEndian::read_u16(&bytes[2..4]),
            vrect: bytes[4] & 0x0F,
            checksum: bytes[4] >> 4,
        }
    }
}

/// Answer to a motor speed query: `cmd[0] cmd[1] speed[0] speed[1]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MotorInfo {
    pub cmd: CommandCode,
    /// Motor speed as two ASCII digits.
    pub speed: [u8; 2],
}

impl MotorInfo {
    /// Motor speed, if the payload is two ASCII digits.
    pub fn speed(&self) -> Option<u8> {
        parse_ascii_digits(self.speed)
    }
}

impl Decode for MotorInfo {
    const SIZE: usize = RESPONSE_INFO_SIZE;

    fn decode(bytes: &[u8]) -> Self {
        MotorInfo {
            cmd: [bytes[0], bytes[1]],
            speed: [bytes[2], bytes[3]],
        }
    }
}

/// Answer to a sample rate query: `cmd[0] cmd[1] rate[0] rate[1]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleRateInfo {
    pub cmd: CommandCode,
    /// Sample rate code as two ASCII digits.
    pub rate: [u8; 2],
}

impl SampleRateInfo {
    /// Sample rate code, if the payload is two ASCII digits.
    pub fn rate(&self) -> Option<u8> {
        parse_ascii_digits(self.rate)
    }
}

impl Decode for SampleRateInfo {
    const SIZE: usize = RESPONSE_INFO_SIZE;

    fn decode(bytes: &[u8]) -> Self {
        SampleRateInfo {
            cmd: [bytes[0], bytes[1]],
            rate: [bytes[2], bytes[3]],
        }
    }
}
