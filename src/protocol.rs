//! Command encoding and response decoding over a blocking byte transport.
//!
//! Writes take any `io::Write`, reads any `io::Read`. Each call performs a
//! complete exchange step or fails; nothing is retried here apart from the
//! one-byte shifts of the scan resynchronizer.

use crate::answers::*;
use crate::base::{Decode, Encode, Error, ErrorKind, Result, ShiftWindow};
use crate::checksum::*;
use crate::cmds::{CommandCode, CommandPacket, CommandParamPacket};
use crate::internals::SCAN_PACKET_SIZE;
use crate::types::ScanOptions;
use log::{debug, error, trace, warn};
use std::io::{Read, Write};

/// Writes a bare command packet (`cmd '\n'`).
pub fn write_command(dest: &mut impl Write, cmd: CommandCode) -> Result<()> {
    trace!("Writing command {}", cmd_str(&cmd));
    CommandPacket { cmd }.write_to(dest).map_err(|err| {
        error!("IO error writing command {}: {}", cmd_str(&cmd), err);
        Error::transport("unable to write command")
    })
}

/// Writes a command packet carrying a two-byte argument (`cmd arg '\n'`).
pub fn write_command_with_arguments(
    dest: &mut impl Write,
    cmd: CommandCode,
    arg: [u8; 2],
) -> Result<()> {
    trace!(
        "Writing command {} with arguments {:02X?}",
        cmd_str(&cmd),
        arg
    );
    CommandParamPacket { cmd, arg }
        .write_to(dest)
        .map_err(|err| {
            error!(
                "IO error writing command {} with arguments: {}",
                cmd_str(&cmd),
                err
            );
            Error::transport("unable to write command with arguments")
        })
}

/// Reads the acknowledgement of a bare command.
///
/// The checksum is validated before the command echo.
pub fn read_response_header(src: &mut impl Read, cmd: CommandCode) -> Result<ResponseHeader> {
    let header = ResponseHeader::read_from(src).map_err(|err| {
        error!("IO error reading response header: {}", err);
        Error::transport("unable to read response header")
    })?;

    let checksum = checksum_response_header(&header);
    if checksum != header.checksum {
        error!(
            "Header checksum mismatch: received {:02X}, calculated {:02X}",
            header.checksum, checksum
        );
        return Err(Error::new(
            ErrorKind::ChecksumMismatch,
            "invalid response header checksum",
        ));
    }

    if header.cmd != cmd {
        error!(
            "Header echoes {:02X?}, expected {}",
            header.cmd,
            cmd_str(&cmd)
        );
        return Err(Error::new(
            ErrorKind::CommandMismatch,
            "invalid header response commands",
        ));
    }

    trace!("Header OK: {:?}", header);
    Ok(header)
}

/// Reads the acknowledgement of a command sent with arguments.
///
/// The checksum is validated before the command echo. The argument echo is
/// returned as received.
pub fn read_response_param(src: &mut impl Read, cmd: CommandCode) -> Result<ResponseParam> {
    let param = ResponseParam::read_from(src).map_err(|err| {
        error!("IO error reading response param: {}", err);
        Error::transport("unable to read response param")
    })?;

    let checksum = checksum_response_param(&param);
    if checksum != param.checksum {
        error!(
            "Param checksum mismatch: received {:02X}, calculated {:02X}",
            param.checksum, checksum
        );
        return Err(Error::new(
            ErrorKind::ChecksumMismatch,
            "invalid response param checksum",
        ));
    }

    if param.cmd != cmd {
        error!("Param echoes {:02X?}, expected {}", param.cmd, cmd_str(&cmd));
        return Err(Error::new(
            ErrorKind::CommandMismatch,
            "invalid param response commands",
        ));
    }

    trace!("Param OK: {:?}", param);
    Ok(param)
}

/// Reads one scan record with the default resynchronization bound.
pub fn read_response_scan(src: &mut impl Read) -> Result<ScanPacket> {
    read_response_scan_with_options(src, &ScanOptions::default())
}

/// Reads one scan record, sliding over the stream until a record boundary is found.
///
/// A window is aligned when both the checksum matches and the sync bits read
/// `s1 = 1, s2 = 0`. A misaligned window drops its first byte and pulls one
/// more byte from `src`, up to `options.max_resync_shifts` times. Giving up
/// consumes exactly `SCAN_PACKET_SIZE + max_resync_shifts` bytes.
pub fn read_response_scan_with_options(
    src: &mut impl Read,
    options: &ScanOptions,
) -> Result<ScanPacket> {
    let mut window = ShiftWindow::<SCAN_PACKET_SIZE>::new();
    window.fill_from(src).map_err(|err| {
        error!("IO error reading scan record: {}", err);
        Error::transport("invalid scan response commands")
    })?;

    let mut packet = ScanPacket::decode(window.as_bytes());
    let mut shifts = 0;
    while !is_aligned(&packet) {
        if shifts == options.max_resync_shifts {
            error!(
                "No aligned scan record within {} shifts, last window {:02X?}",
                shifts,
                window.as_bytes()
            );
            return Err(Error::new(
                ErrorKind::ResyncExhausted,
                "invalid scan response commands",
            ));
        }
        if shifts == 0 {
            warn!("Scan stream misaligned at {:02X?}, resynchronizing", window.as_bytes());
        }

        let dropped = window.shift_in(src).map_err(|err| {
            error!("IO error reading scan resync byte: {}", err);
            Error::transport("invalid scan response commands")
        })?;
        shifts += 1;
        trace!(
            "Shift {}: dropped {:02X}, window {:02X?}",
            shifts,
            dropped,
            window.as_bytes()
        );
        packet = ScanPacket::decode(window.as_bytes());
    }

    if shifts > 0 {
        debug!("Scan stream realigned after {} shifts", shifts);
    }
    trace!("Scan record OK: {:?}", packet);
    Ok(packet)
}

/// Reads the answer to a motor speed query. Only the command echo is validated.
pub fn read_response_info_motor(src: &mut impl Read, cmd: CommandCode) -> Result<MotorInfo> {
    let info = MotorInfo::read_from(src).map_err(|err| {
        error!("IO error reading motor info: {}", err);
        Error::transport("unable to read response motor info")
    })?;

    if info.cmd != cmd {
        error!("Motor info echoes {:02X?}, expected {}", info.cmd, cmd_str(&cmd));
        return Err(Error::new(
            ErrorKind::CommandMismatch,
            "invalid motor info response commands",
        ));
    }

    trace!("Motor info OK: {:?}", info);
    Ok(info)
}

/// Reads the answer to a sample rate query. Only the command echo is validated.
pub fn read_response_info_sample_rate(
    src: &mut impl Read,
    cmd: CommandCode,
) -> Result<SampleRateInfo> {
    let info = SampleRateInfo::read_from(src).map_err(|err| {
        error!("IO error reading sample rate info: {}", err);
        Error::transport("unable to read response sample rate info")
    })?;

    if info.cmd != cmd {
        error!(
            "Sample rate info echoes {:02X?}, expected {}",
            info.cmd,
            cmd_str(&cmd)
        );
        return Err(Error::new(
            ErrorKind::CommandMismatch,
            "invalid sample rate info response commands",
        ));
    }

    trace!("Sample rate info OK: {:?}", info);
    Ok(info)
}

fn is_aligned(packet: &ScanPacket) -> bool {
    scan_checksum_matches(packet) && scan_sync_bits_valid(packet)
}

fn cmd_str(cmd: &CommandCode) -> String {
    String::from_utf8_lossy(cmd).into_owned()
}
