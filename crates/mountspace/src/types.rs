/// Bytes per megabyte as used for free-space reporting.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Raw statistics for one mounted filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsStats {
    /// Blocks available to an unprivileged user (`f_bavail`)
    pub blocks_available: u64,
    /// Fragment size in bytes (`f_frsize`)
    pub block_size: u64,
}

impl FsStats {
    /// Create stats from a block count and block size
    pub fn new(blocks_available: u64, block_size: u64) -> Self {
        Self {
            blocks_available,
            block_size,
        }
    }

    /// Stats describing exactly `bytes` of available space, using 1-byte blocks
    pub fn from_bytes(bytes: u64) -> Self {
        Self::new(bytes, 1)
    }

    /// Stats describing `mb` megabytes of available space
    pub fn from_mb(mb: u64) -> Self {
        Self::new(mb, BYTES_PER_MB)
    }

    /// Available bytes, saturating on overflow
    pub fn available_bytes(&self) -> u64 {
        self.blocks_available.saturating_mul(self.block_size)
    }

    /// Available space in megabytes
    pub fn available_mb(&self) -> f64 {
        self.blocks_available as f64 * self.block_size as f64 / BYTES_PER_MB as f64
    }
}
