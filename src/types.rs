use crate::internals::DEFAULT_MAX_RESYNC_SHIFTS;

/// Tuning for scan record decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// How many one-byte shifts a scan read may perform looking for a record
    /// boundary before failing. `0` accepts only an already aligned stream.
    pub max_resync_shifts: usize,
}

impl ScanOptions {
    /// Options with a custom resynchronization bound.
    pub fn with_max_resync_shifts(max_resync_shifts: usize) -> ScanOptions {
        ScanOptions { max_resync_shifts }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_resync_shifts: DEFAULT_MAX_RESYNC_SHIFTS,
        }
    }
}
