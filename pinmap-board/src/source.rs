//! In-memory pin usage source

use pinmap_core::pins::PinUsage;
use pinmap_core::{PinUsageSource, TransportError};

use crate::layout::{HeaderLayout, LayoutError};
use crate::registry::ClaimRegistry;
use crate::revision::BoardRevision;
use crate::usage::pin_usage;

/// Pin usage served from a local layout and claim registry
///
/// Stands in for the board's GPIO service on hosts and in tests. Claims
/// changed through [`registry_mut`](Self::registry_mut) show up on the
/// next fetch.
#[derive(Debug, Clone)]
pub struct BoardSource {
    revision: u8,
    layout: HeaderLayout,
    registry: ClaimRegistry,
}

impl BoardSource {
    /// Serve the built-in layout of a board revision
    pub fn new(revision: BoardRevision) -> Result<Self, LayoutError> {
        Self::with_layout(revision.as_u8(), revision.layout()?)
    }

    /// Serve a custom layout, reporting `revision`
    pub fn with_layout(revision: u8, layout: HeaderLayout) -> Result<Self, LayoutError> {
        let registry = ClaimRegistry::new(&layout)?;
        Ok(Self {
            revision,
            layout,
            registry,
        })
    }

    /// Get the served layout
    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    /// Get the claim registry
    pub fn registry(&self) -> &ClaimRegistry {
        &self.registry
    }

    /// Get mutable access to the claim registry
    pub fn registry_mut(&mut self) -> &mut ClaimRegistry {
        &mut self.registry
    }

    /// Build the current snapshot
    pub fn snapshot(&self) -> Result<PinUsage, LayoutError> {
        pin_usage(&self.layout, &self.registry)
    }
}

impl PinUsageSource for BoardSource {
    async fn fetch_pin_usage(&mut self) -> Result<PinUsage, TransportError> {
        self.snapshot().map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Cannot build snapshot for {}: {}", self.layout.name(), _e);
            TransportError::Rejected
        })
    }

    async fn fetch_board_revision(&mut self) -> Result<u8, TransportError> {
        Ok(self.revision)
    }
}
