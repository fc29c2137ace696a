use log::trace;
use std::io;

/// Upper bound on the wire size of any fixed-width packet in this protocol.
pub const MAX_PACKET_SIZE: usize = 8;

/// A fixed-width packet that can be serialized for the device.
pub trait Encode {
    /// Number of bytes the packet occupies on the wire.
    const SIZE: usize;

    /// Serializes the packet into `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Encode::SIZE`].
    fn encode(&self, bytes: &mut [u8]);

    /// Serializes the packet and writes it to `dest` in one `write_all`, then flushes.
    ///
    /// A short write surfaces as an `io::Error`.
    fn write_to(&self, dest: &mut impl io::Write) -> io::Result<()> {
        debug_assert!(Self::SIZE <= MAX_PACKET_SIZE);
        let mut buf = [0u8; MAX_PACKET_SIZE];
        let bytes = &mut buf[..Self::SIZE];
        self.encode(bytes);
        trace!("Writing {} bytes: {:02X?}", Self::SIZE, bytes);
        dest.write_all(bytes)?;
        dest.flush()
    }
}

/// A fixed-width packet that can be parsed from device bytes.
pub trait Decode: Sized {
    /// Number of bytes the packet occupies on the wire.
    const SIZE: usize;

    /// Parses the packet fields out of `bytes`. No validation is performed here.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Decode::SIZE`].
    fn decode(bytes: &[u8]) -> Self;

    /// Reads exactly [`Decode::SIZE`] bytes from `src` and parses them.
    ///
    /// A short read surfaces as an `io::Error`; there is no partial success.
    fn read_from(src: &mut impl io::Read) -> io::Result<Self> {
        debug_assert!(Self::SIZE <= MAX_PACKET_SIZE);
        let mut buf = [0u8; MAX_PACKET_SIZE];
        let bytes = &mut buf[..Self::SIZE];
        src.read_exact(bytes)?;
        trace!("Read {} bytes: {:02X?}", Self::SIZE, bytes);
        Ok(Self::decode(bytes))
    }
}
