//! Snapshot wire format
//!
//! Pin usage snapshots travel between the board service and the engine as
//! postcard frames: magic, format version, then the pin map.

use pinmap_core::pins::PinUsage;
use pinmap_core::TransportError;
use serde::{Deserialize, Serialize};

/// Frame marker
pub const FRAME_MAGIC: [u8; 2] = *b"PM";

/// Current frame format version
pub const FRAME_VERSION: u8 = 1;

/// Buffer size that fits any snapshot
pub const MAX_FRAME_SIZE: usize = 4096;

/// Errors encoding a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Output buffer too small
    BufferTooSmall,
    /// Serialization failed
    Serialize,
}

impl From<postcard::Error> for WireError {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull => WireError::BufferTooSmall,
            _ => WireError::Serialize,
        }
    }
}

#[derive(Serialize)]
struct FrameRef<'a> {
    magic: [u8; 2],
    version: u8,
    pins: &'a PinUsage,
}

#[derive(Deserialize)]
struct Frame {
    magic: [u8; 2],
    version: u8,
    pins: PinUsage,
}

/// Encode a snapshot into `buf`
///
/// # Returns
/// Number of bytes written.
pub fn encode_usage(usage: &PinUsage, buf: &mut [u8]) -> Result<usize, WireError> {
    let frame = FrameRef {
        magic: FRAME_MAGIC,
        version: FRAME_VERSION,
        pins: usage,
    };
    let bytes = postcard::to_slice(&frame, buf)?;
    Ok(bytes.len())
}

/// Decode a snapshot frame
///
/// Any malformed frame, wrong magic or unknown version is
/// [`TransportError::Decode`].
pub fn decode_usage(bytes: &[u8]) -> Result<PinUsage, TransportError> {
    let frame: Frame = postcard::from_bytes(bytes).map_err(|_| TransportError::Decode)?;
    if frame.magic != FRAME_MAGIC || frame.version != FRAME_VERSION {
        return Err(TransportError::Decode);
    }
    Ok(frame.pins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClaimRegistry;
    use crate::revision::BoardRevision;
    use crate::usage::pin_usage;

    fn snapshot() -> PinUsage {
        let layout = BoardRevision::Rev3.layout().unwrap();
        let mut registry = ClaimRegistry::new(&layout).unwrap();
        registry.claim("GPIO18", "onewire").unwrap();
        pin_usage(&layout, &registry).unwrap()
    }

    #[test]
    fn test_claims_survive_transfer() {
        let usage = snapshot();
        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = encode_usage(&usage, &mut buf).unwrap();

        let decoded = decode_usage(&buf[..len]).unwrap();
        assert_eq!(decoded, usage);
        let info = decoded.get(&12).and_then(|d| d.signal()).unwrap();
        assert_eq!(info.owner.as_deref(), Some("onewire"));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(encode_usage(&snapshot(), &mut buf), Err(WireError::BufferTooSmall));
    }

    #[test]
    fn test_rejects_bad_frames() {
        assert_eq!(decode_usage(&[]), Err(TransportError::Decode));

        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = encode_usage(&snapshot(), &mut buf).unwrap();
        assert_eq!(decode_usage(&buf[..len / 2]), Err(TransportError::Decode));

        // Version byte follows the two magic bytes
        buf[2] = FRAME_VERSION + 1;
        assert_eq!(decode_usage(&buf[..len]), Err(TransportError::Decode));
    }
}
