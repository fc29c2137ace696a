use std::io::{self, Read};

/// A fixed-size byte window that slides forward over a byte stream.
///
/// The window is filled once with [`ShiftWindow::fill_from`], after which each
/// [`ShiftWindow::shift_in`] drops the oldest byte and pulls exactly one new byte
/// from the upstream reader into the last slot. Sliding never re-reads the
/// whole window.
///
/// `N` must be greater than zero.
///
/// # Example
///
/// ```rust
/// # use std::io::Cursor;
/// # use neolidar::base::ShiftWindow;
/// let mut stream = Cursor::new(vec![1u8, 2, 3, 4]);
/// let mut window = ShiftWindow::<3>::new();
/// window.fill_from(&mut stream).unwrap();
/// assert_eq!(window.as_bytes(), &[1, 2, 3]);
/// window.shift_in(&mut stream).unwrap();
/// assert_eq!(window.as_bytes(), &[2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftWindow<const N: usize> {
    buf: [u8; N],
}

impl<const N: usize> ShiftWindow<N> {
    /// Creates a zeroed window.
    pub fn new() -> ShiftWindow<N> {
        ShiftWindow { buf: [0; N] }
    }

    /// Returns the window size in bytes.
    pub fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the window holds no bytes at all (`N == 0`).
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current window contents, oldest byte first.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.buf
    }

    /// Replaces the whole window with `N` bytes read from `upstream`.
    pub fn fill_from(&mut self, upstream: &mut impl Read) -> io::Result<()> {
        upstream.read_exact(&mut self.buf)
    }

    /// Drops the oldest byte and appends `byte`, returning the dropped byte.
    pub fn push(&mut self, byte: u8) -> u8 {
        let dropped = self.buf[0];
        self.buf.copy_within(1.., 0);
        self.buf[N - 1] = byte;
        dropped
    }

    /// Drops the oldest byte and refills the last slot with one byte read from `upstream`.
    ///
    /// Returns the dropped byte. On a read failure the window has already been
    /// shifted and its last slot is unspecified.
    pub fn shift_in(&mut self, upstream: &mut impl Read) -> io::Result<u8> {
        let dropped = self.buf[0];
        self.buf.copy_within(1.., 0);
        upstream.read_exact(&mut self.buf[N - 1..])?;
        Ok(dropped)
    }
}

impl<const N: usize> Default for ShiftWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
