use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, resampling, and frame encoding.
///
/// Every variant is fatal to the conversion that produced it. Noise in a hex
/// stream is not an error: the resilient decoder absorbs it (see
/// [`crate::HexDecoder`]).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FrameError {
    #[error("not a BMP file: signature {found:02X?}, expected \"BM\"")]
    InvalidSignature { found: [u8; 2] },

    #[error("unsupported BMP variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("failed to allocate {bytes} byte pixel buffer")]
    AllocationFailed { bytes: usize },

    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for FrameError {
    fn from(r: StopReason) -> Self {
        FrameError::Cancelled(r)
    }
}
