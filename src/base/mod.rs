mod error;
mod shift_window;
mod traits;

pub use self::error::{Error, ErrorKind, Result};
pub use self::shift_window::ShiftWindow;
pub use self::traits::{Decode, Encode, MAX_PACKET_SIZE};
