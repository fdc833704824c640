//! Pin usage source trait

use crate::pins::PinUsage;

/// Errors from fetching pin usage data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Backend could not be reached
    Unreachable,
    /// Request timed out
    Timeout,
    /// Response could not be decoded
    Decode,
    /// Backend refused the request
    Rejected,
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            TransportError::Unreachable => "backend unreachable",
            TransportError::Timeout => "request timed out",
            TransportError::Decode => "malformed response",
            TransportError::Rejected => "request rejected",
        };
        f.write_str(msg)
    }
}

/// Source of pin usage snapshots
///
/// Implementations typically wrap an RPC call to the board's GPIO service.
pub trait PinUsageSource {
    /// Fetch the current pin usage snapshot
    ///
    /// # Returns
    /// One descriptor per physical header pin, or a transport error.
    fn fetch_pin_usage(&mut self) -> impl core::future::Future<Output = Result<PinUsage, TransportError>>;

    /// Fetch the board revision
    ///
    /// Used only to pick the header layout template. Callers fall back
    /// to a configured revision when this fails.
    fn fetch_board_revision(&mut self) -> impl core::future::Future<Output = Result<u8, TransportError>>;
}
