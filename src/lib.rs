//! # neolidar
//!
//! `neolidar` speaks the serial wire protocol of spinning-mirror range-finding
//! sensors. It encodes two-letter ASCII commands, validates the fixed-width
//! acknowledgements the device answers with, and decodes the continuous stream
//! of scan records once acquisition is running, realigning on the record
//! boundary whenever framing slips.
//!
//! The transport is any blocking `Read + Write` stream, typically an already
//! configured serial port. Free functions in [`protocol`] perform single
//! exchange steps; [`Device`] pairs each command with its response.

extern crate byteorder;
extern crate log;

mod answers;
pub mod base;
mod checksum;
pub mod cmds;
mod internals;
pub mod protocol;
pub mod types;
pub mod utils;

pub use crate::answers::{MotorInfo, ResponseHeader, ResponseParam, SampleRateInfo, ScanPacket};
pub use crate::base::{Error, ErrorKind, Result};
pub use crate::checksum::{
    checksum_response_scan_packet, scan_checksum_matches, scan_sync_bits_valid, status_checksum,
};
pub use crate::types::ScanOptions;

use crate::cmds::*;
use crate::protocol::*;
use crate::utils::ascii_digits;
use log::{error, trace};
use std::io::{Read, Write};

/// A connection to a sensor over a byte stream.
///
/// Every method performs one complete exchange and blocks until it finishes
/// or fails. Exclusive access to the stream is guaranteed by `&mut self`;
/// callers that interleave commands with scan reads must do so on the same
/// `Device`.
///
/// # Example
/// ```ignore
/// # use neolidar::Device;
/// let port = serialport::new("/dev/ttyUSB0", 115200).open()?;
/// let mut device = Device::new(port);
/// device.start_scanning()?;
/// let packet = device.next_scan()?;
/// println!("distance {} angle {}", packet.distance(), packet.angle());
/// device.stop_scanning()?;
/// ```
#[derive(Debug)]
pub struct Device<T> {
    stream: T,
    options: ScanOptions,
}

impl<T> Device<T>
where
    T: Read + Write,
{
    /// Wraps `stream` with the default scan options.
    pub fn new(stream: T) -> Device<T> {
        Device::with_options(stream, ScanOptions::default())
    }

    /// Wraps `stream` with custom scan options.
    pub fn with_options(stream: T, options: ScanOptions) -> Device<T> {
        trace!("Creating new Device with {:?}", options);
        Device { stream, options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Mutable access to the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.stream
    }

    /// Releases the underlying stream.
    pub fn into_inner(self) -> T {
        self.stream
    }

    /// Starts data acquisition and returns the device acknowledgement.
    pub fn start_scanning(&mut self) -> Result<ResponseHeader> {
        trace!("Starting data acquisition");
        self.invoke_header(DATA_ACQUISITION_START)
    }

    /// Stops data acquisition and returns the device acknowledgement.
    ///
    /// Scan records still in flight are not drained.
    pub fn stop_scanning(&mut self) -> Result<ResponseHeader> {
        trace!("Stopping data acquisition");
        self.invoke_header(DATA_ACQUISITION_STOP)
    }

    /// Adjusts the motor speed.
    ///
    /// # Arguments
    ///
    /// * `speed` - Sent as two ASCII digits; values above 99 are rejected before anything is written.
    pub fn set_motor_speed(&mut self, speed: u8) -> Result<ResponseParam> {
        trace!("Setting motor speed to {}", speed);
        self.invoke_param(MOTOR_SPEED_ADJUST, speed)
    }

    /// Queries the current motor speed.
    pub fn motor_info(&mut self) -> Result<MotorInfo> {
        trace!("Querying motor information");
        write_command(&mut self.stream, MOTOR_INFORMATION)?;
        read_response_info_motor(&mut self.stream, MOTOR_INFORMATION)
    }

    /// Adjusts the sample rate.
    ///
    /// # Arguments
    ///
    /// * `code` - Sample rate code, sent as two ASCII digits.
    pub fn set_sample_rate(&mut self, code: u8) -> Result<ResponseParam> {
        trace!("Setting sample rate code to {}", code);
        self.invoke_param(SAMPLE_RATE_ADJUST, code)
    }

    /// Queries the current sample rate code.
    pub fn sample_rate_info(&mut self) -> Result<SampleRateInfo> {
        trace!("Querying sample rate information");
        write_command(&mut self.stream, SAMPLE_RATE_INFORMATION)?;
        read_response_info_sample_rate(&mut self.stream, SAMPLE_RATE_INFORMATION)
    }

    /// Sends the reset command. The device does not acknowledge it.
    pub fn reset(&mut self) -> Result<()> {
        trace!("Resetting device");
        write_command(&mut self.stream, RESET_DEVICE)
    }

    /// Sends the calibration command. The device does not acknowledge it.
    pub fn calibrate(&mut self) -> Result<()> {
        trace!("Calibrating device");
        write_command(&mut self.stream, DEVICE_CALIBRATION)
    }

    /// Reads the next scan record, resynchronizing within the configured bound.
    pub fn next_scan(&mut self) -> Result<ScanPacket> {
        read_response_scan_with_options(&mut self.stream, &self.options)
    }

    fn invoke_header(&mut self, cmd: CommandCode) -> Result<ResponseHeader> {
        write_command(&mut self.stream, cmd)?;
        let header = read_response_header(&mut self.stream, cmd)?;
        trace!("Status {:02X?} for {:02X?}", header.status, cmd);
        Ok(header)
    }

    fn invoke_param(&mut self, cmd: CommandCode, value: u8) -> Result<ResponseParam> {
        let arg = ascii_digits(value).map_err(|err| {
            error!("Refusing to send {:02X?} with argument {}", cmd, value);
            err
        })?;
        write_command_with_arguments(&mut self.stream, cmd, arg)?;
        let param = read_response_param(&mut self.stream, cmd)?;
        trace!("Status {:02X?} for {:02X?}", param.status, cmd);
        Ok(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// In-memory port: reads come from `rx`, writes land in `tx`.
    struct MockPort {
        rx: Cursor<Vec<u8>>,
        tx: Vec<u8>,
    }

    impl MockPort {
        fn new(rx: Vec<u8>) -> MockPort {
            MockPort {
                rx: Cursor::new(rx),
                tx: Vec::new(),
            }
        }
    }

    impl Read for MockPort {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.rx.read(buf)
        }
    }

    impl Write for MockPort {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.tx.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn ack(cmd: &[u8], status: [u8; 2]) -> Vec<u8> {
        let mut bytes = cmd.to_vec();
        bytes.extend_from_slice(&status);
        bytes.push(status_checksum(status));
        bytes
    }

    #[test]
    fn start_and_stop_scanning() {
        let mut rx = ack(b"DS", *b"00");
        rx.extend(ack(b"DX", *b"00"));
        let mut device = Device::new(MockPort::new(rx));

        assert_eq!(device.start_scanning().unwrap().status_code(), Some(0));
        assert_eq!(device.stop_scanning().unwrap().status_code(), Some(0));
        assert_eq!(device.into_inner().tx, b"DS\nDX\n");
    }

    #[test]
    fn set_motor_speed_sends_ascii_argument() {
        let mut device = Device::new(MockPort::new(ack(b"MS05", *b"00")));
        let param = device.set_motor_speed(5).unwrap();
        assert_eq!(param.arg, *b"05");
        assert_eq!(device.get_mut().tx, b"MS05\n");
    }

    #[test]
    fn out_of_range_argument_writes_nothing() {
        let mut device = Device::new(MockPort::new(Vec::new()));
        let err = device.set_sample_rate(100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(device.get_mut().tx.is_empty());
    }

    #[test]
    fn info_queries() {
        let mut device = Device::new(MockPort::new(b"MI10LI03".to_vec()));
        assert_eq!(device.motor_info().unwrap().speed(), Some(10));
        assert_eq!(device.sample_rate_info().unwrap().rate(), Some(3));
        assert_eq!(device.get_mut().tx, b"MI\nLI\n");
    }

    #[test]
    fn reset_and_calibrate_are_write_only() {
        let mut device = Device::new(MockPort::new(Vec::new()));
        device.reset().unwrap();
        device.calibrate().unwrap();
        assert_eq!(device.get_mut().tx, b"RR\nCS\n");
    }

    #[test]
    fn next_scan_uses_configured_bound() {
        let mut device = Device::with_options(
            MockPort::new(vec![0u8; 64]),
            ScanOptions::with_max_resync_shifts(10),
        );
        let err = device.next_scan().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResyncExhausted);
        assert_eq!(device.get_mut().rx.position(), 15);
    }

    #[test]
    fn next_scan_after_start() {
        let mut rx = ack(b"DS", *b"00");
        // head 0x01, distance_high 0x01: checksum 2
        rx.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x20]);
        let mut device = Device::new(MockPort::new(rx));
        device.start_scanning().unwrap();
        let packet = device.next_scan().unwrap();
        assert_eq!(packet.distance(), 32);
        assert!(packet.is_sync());
    }

    #[test]
    fn rejected_acknowledgement() {
        let mut rx = ack(b"DX", *b"00");
        rx[4] ^= 0x04;
        let mut device = Device::new(MockPort::new(rx));
        let err = device.stop_scanning().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch);
    }
}
