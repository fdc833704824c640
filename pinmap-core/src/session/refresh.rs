//! Refresh handling with generation tracking

use crate::config::EngineConfig;
use crate::controller::{RefreshReport, SlotAssignmentController};
use crate::error::EngineError;
use crate::pins::PinUsage;
use crate::slots::Slot;
use crate::traits::{PinUsageSource, TransportError};

/// Handle for one outstanding refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshTicket {
    generation: u32,
    /// Board revision fetched for this request
    revision: Option<u8>,
}

impl RefreshTicket {
    /// Get the request generation
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Attach the board revision fetched alongside this request
    ///
    /// The session adopts it only if the request is applied.
    pub fn with_revision(self, revision: u8) -> Self {
        Self {
            revision: Some(revision),
            ..self
        }
    }

    /// Get the attached board revision
    pub fn revision(&self) -> Option<u8> {
        self.revision
    }
}

/// Result of completing a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshOutcome {
    /// Snapshot installed
    Applied(RefreshReport),
    /// A newer request was issued; response discarded
    Stale,
}

/// Live pin allocation session backed by a usage source
pub struct PinSession<'s, S: PinUsageSource> {
    source: S,
    controller: SlotAssignmentController<'s>,
    /// Board revision from the last fetch (or the fallback)
    revision: u8,
    /// Newest refresh generation handed out
    issued: u32,
    /// Last generation that was completed
    completed: u32,
}

impl<'s, S: PinUsageSource> PinSession<'s, S> {
    /// Fetch the revision and snapshot, then initialize the controller
    ///
    /// A failed revision fetch falls back to
    /// [`EngineConfig::fallback_revision`]. A failed snapshot fetch is
    /// returned to the caller.
    pub async fn start(mut source: S, slots: &'s mut [Slot], config: EngineConfig) -> Result<Self, EngineError> {
        let revision = fetch_revision(&mut source, config.fallback_revision).await;
        let usage = source.fetch_pin_usage().await?;
        let controller = SlotAssignmentController::initialize(slots, usage, config)?;

        info!("Pin session started on board revision {}", revision);
        Ok(Self {
            source,
            controller,
            revision,
            issued: 0,
            completed: 0,
        })
    }

    /// Re-fetch the revision and snapshot and install them
    ///
    /// Slot bindings survive, except for slots whose pin disappeared. On a
    /// transport failure the previous state stays in place.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome, EngineError> {
        let ticket = self.begin_refresh();
        let revision = fetch_revision(&mut self.source, self.controller.config().fallback_revision).await;
        let ticket = ticket.with_revision(revision);
        let result = self.source.fetch_pin_usage().await;
        self.complete_refresh(ticket, result)
    }

    /// Register a new refresh request
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued = self.issued.wrapping_add(1);
        RefreshTicket {
            generation: self.issued,
            revision: None,
        }
    }

    /// Install the response to a refresh request
    ///
    /// Responses to superseded or already completed tickets are dropped
    /// without touching any state, whether they carry a snapshot or an
    /// error. The revision attached to the ticket is adopted only when the
    /// snapshot is applied.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<PinUsage, TransportError>,
    ) -> Result<RefreshOutcome, EngineError> {
        if ticket.generation != self.issued || ticket.generation == self.completed {
            debug!(
                "Discarding stale refresh {} (latest {})",
                ticket.generation, self.issued
            );
            return Ok(RefreshOutcome::Stale);
        }
        self.completed = ticket.generation;

        let usage = result.map_err(|e| {
            warn!("Pin usage refresh failed: {}", e);
            EngineError::TransportFailure(e)
        })?;
        let report = self.controller.replace_usage(usage)?;
        if let Some(revision) = ticket.revision {
            self.revision = revision;
        }
        debug!("Refresh {} applied", ticket.generation);
        Ok(RefreshOutcome::Applied(report))
    }

    /// Get the controller
    pub fn controller(&self) -> &SlotAssignmentController<'s> {
        &self.controller
    }

    /// Get the controller for click handling
    pub fn controller_mut(&mut self) -> &mut SlotAssignmentController<'s> {
        &mut self.controller
    }

    /// Board revision from the latest fetch
    pub fn revision(&self) -> u8 {
        self.revision
    }

    /// Get the usage source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the usage source mutably
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// End the session, returning the source and the slot list
    pub fn into_parts(self) -> (S, &'s mut [Slot]) {
        (self.source, self.controller.into_slots())
    }
}

async fn fetch_revision<S: PinUsageSource>(source: &mut S, fallback: u8) -> u8 {
    match source.fetch_board_revision().await {
        Ok(revision) => revision,
        Err(e) => {
            warn!(
                "Board revision unavailable ({}), assuming revision {}",
                e, fallback
            );
            fallback
        }
    }
}
