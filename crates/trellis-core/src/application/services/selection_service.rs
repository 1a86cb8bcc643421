//! Selection Service - load and validate service selections.
//!
//! Sources only decode; this service applies the unknown-slug policy and the
//! selection rules from the domain layer.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::SelectionSource,
    domain::{Selection, SelectionRequest, UnknownPolicy},
    error::TrellisResult,
};

/// Main selection service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionService {
    policy: UnknownPolicy,
}

impl SelectionService {
    /// Create a selection service with the given policy for unknown slugs.
    pub fn new(policy: UnknownPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownPolicy {
        self.policy
    }

    /// Validate an already-decoded request.
    pub fn resolve_request(&self, request: SelectionRequest) -> TrellisResult<Selection> {
        debug!(
            origin = %request.origin,
            entries = request.services.len(),
            "Resolving selection"
        );
        Ok(Selection::resolve(request, self.policy)?)
    }

    /// Load from `source`, then validate.
    #[instrument(skip_all, fields(origin = %source.origin(), policy = %self.policy))]
    pub fn load(&self, source: &dyn SelectionSource) -> TrellisResult<Selection> {
        let request = source.load()?;
        let selection = self.resolve_request(request)?;
        info!(services = selection.len(), "Selection is valid");
        Ok(selection)
    }
}
