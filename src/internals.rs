/// Terminates every outbound command packet.
pub const CMD_TERMINATOR: u8 = b'\n';

/// `cmd[2] + '\n'`
pub const CMD_PACKET_SIZE: usize = 3;

/// `cmd[2] + arg[2] + '\n'`
pub const CMD_PARAM_PACKET_SIZE: usize = 5;

/// `cmd[2] + status[2] + sum`
pub const RESPONSE_HEADER_SIZE: usize = 5;

/// `cmd[2] + arg[2] + status[2] + sum`
pub const RESPONSE_PARAM_SIZE: usize = 7;

/// `cmd[2] + payload[2]`
pub const RESPONSE_INFO_SIZE: usize = 4;

/// One scan record, also the resynchronization window size.
pub const SCAN_PACKET_SIZE: usize = 5;

/// Default number of one-byte shifts tried before a scan read gives up.
pub const DEFAULT_MAX_RESYNC_SHIFTS: usize = 100;
