//! Pin usage session
//!
//! Couples a [`PinUsageSource`](crate::traits::PinUsageSource) with a
//! slot assignment controller: fetches the snapshot once at start and
//! again on every refresh request, discarding responses that were
//! overtaken by a newer request.

pub mod refresh;

pub use refresh::{PinSession, RefreshOutcome, RefreshTicket};
