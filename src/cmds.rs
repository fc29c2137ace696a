use crate::base::Encode;
use crate::internals::{CMD_PACKET_SIZE, CMD_PARAM_PACKET_SIZE, CMD_TERMINATOR};

/// Two raw ASCII bytes selecting a device operation.
pub type CommandCode = [u8; 2];

/// Starts streaming scan records.
pub const DATA_ACQUISITION_START: CommandCode = *b"DS";

/// Stops streaming scan records.
pub const DATA_ACQUISITION_STOP: CommandCode = *b"DX";

/// Adjusts the mirror motor speed. Takes a two-byte argument.
pub const MOTOR_SPEED_ADJUST: CommandCode = *b"MS";

/// Queries the current motor speed.
pub const MOTOR_INFORMATION: CommandCode = *b"MI";

/// Adjusts the sample rate. Takes a two-byte argument.
pub const SAMPLE_RATE_ADJUST: CommandCode = *b"LR";

/// Queries the current sample rate.
pub const SAMPLE_RATE_INFORMATION: CommandCode = *b"LI";

/// Queries firmware and hardware versions.
pub const VERSION_INFORMATION: CommandCode = *b"IV";

/// Queries device identification and state.
pub const DEVICE_INFORMATION: CommandCode = *b"ID";

/// Resets the device.
pub const RESET_DEVICE: CommandCode = *b"RR";

/// Runs the device calibration routine.
pub const DEVICE_CALIBRATION: CommandCode = *b"CS";

/// Bare command: `cmd[0] cmd[1] '\n'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    pub cmd: CommandCode,
}

impl Encode for CommandPacket {
    const SIZE: usize = CMD_PACKET_SIZE;

    fn encode(&self, bytes: &mut [u8]) {
        bytes[0] = self.cmd[0];
        bytes[1] = self.cmd[1];
        bytes[2] = CMD_TERMINATOR;
    }
}

/// Command with argument: `cmd[0] cmd[1] arg[0] arg[1] '\n'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandParamPacket {
    pub cmd: CommandCode,
    pub arg: [u8; 2],
}

impl Encode for CommandParamPacket {
    const SIZE: usize = CMD_PARAM_PACKET_SIZE;

    fn encode(&self, bytes: &mut [u8]) {
        bytes[0] = self.cmd[0];
        bytes[1] = self.cmd[1];
        bytes[2] = self.arg[0];
        bytes[3] = self.arg[1];
        bytes[4] = CMD_TERMINATOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_command_layout() {
        let mut buf = [0u8; CommandPacket::SIZE];
        CommandPacket {
            cmd: DATA_ACQUISITION_START,
        }
        .encode(&mut buf);
        assert_eq!(&buf, b"DS\n");
    }

    #[test]
    fn param_command_layout() {
        let mut buf = [0u8; CommandParamPacket::SIZE];
        CommandParamPacket {
            cmd: MOTOR_SPEED_ADJUST,
            arg: *b"05",
        }
        .encode(&mut buf);
        assert_eq!(&buf, b"MS05\n");
    }

    #[test]
    fn command_codes_are_distinct() {
        let all = [
            DATA_ACQUISITION_START,
            DATA_ACQUISITION_STOP,
            MOTOR_SPEED_ADJUST,
            MOTOR_INFORMATION,
            SAMPLE_RATE_ADJUST,
            SAMPLE_RATE_INFORMATION,
            VERSION_INFORMATION,
            DEVICE_INFORMATION,
            RESET_DEVICE,
            DEVICE_CALIBRATION,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.iter().all(u8::is_ascii_uppercase));
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
