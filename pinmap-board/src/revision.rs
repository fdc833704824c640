//! Board revisions

use pinmap_core::{PinSession, PinUsageSource};

use crate::layout::{HeaderLayout, LayoutError, PinLabel};
use crate::templates::{REV1, REV2, REV3_EXTENSION};

/// Raspberry Pi header revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardRevision {
    /// Original 26-pin header
    Rev1,
    /// 26-pin header with I2C on GPIO2/GPIO3
    Rev2,
    /// 40-pin header
    #[default]
    Rev3,
}

impl BoardRevision {
    /// Map a reported revision number
    pub fn from_u8(revision: u8) -> Option<Self> {
        match revision {
            1 => Some(BoardRevision::Rev1),
            2 => Some(BoardRevision::Rev2),
            3 => Some(BoardRevision::Rev3),
            _ => None,
        }
    }

    /// Map a reported revision number, unknown numbers to the 40-pin header
    pub fn resolve(revision: u8) -> Self {
        Self::from_u8(revision).unwrap_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unknown board revision {}, using 40-pin header", revision);
            Self::default()
        })
    }

    /// Get the revision number
    pub fn as_u8(self) -> u8 {
        match self {
            BoardRevision::Rev1 => 1,
            BoardRevision::Rev2 => 2,
            BoardRevision::Rev3 => 3,
        }
    }

    /// Number of header pins
    pub fn pin_count(self) -> usize {
        match self {
            BoardRevision::Rev1 | BoardRevision::Rev2 => 26,
            BoardRevision::Rev3 => 40,
        }
    }

    /// Build the header layout for this revision
    pub fn layout(self) -> Result<HeaderLayout, LayoutError> {
        match self {
            BoardRevision::Rev1 => HeaderLayout::from_table("Raspberry Pi rev 1", REV1),
            BoardRevision::Rev2 => HeaderLayout::from_table("Raspberry Pi rev 2", REV2),
            BoardRevision::Rev3 => {
                let mut layout = HeaderLayout::from_table("Raspberry Pi 40-pin", REV2)?;
                for &(pin, label) in REV3_EXTENSION {
                    layout.insert(pin, PinLabel::parse(label)?)?;
                }
                Ok(layout)
            }
        }
    }
}

/// Header layout for the board a session is running on
///
/// Uses the revision from the session's latest fetch, which is the
/// configured fallback when the source could not report one.
pub fn session_layout<S: PinUsageSource>(session: &PinSession<'_, S>) -> Result<HeaderLayout, LayoutError> {
    BoardRevision::resolve(session.revision()).layout()
}
