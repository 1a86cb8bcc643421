//! In-memory selection source (for tests and inline input).

use trellis_core::{
    application::ports::SelectionSource, domain::SelectionRequest, error::TrellisResult,
};

/// A fixed selection held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySelectionSource {
    request: SelectionRequest,
}

impl InMemorySelectionSource {
    pub const ORIGIN: &'static str = "<memory>";

    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            request: SelectionRequest::new(Self::ORIGIN, services),
        }
    }

    /// Override the origin shown in error messages.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.request.origin = origin.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }
}

impl SelectionSource for InMemorySelectionSource {
    fn origin(&self) -> String {
        self.request.origin.clone()
    }

    fn load(&self) -> TrellisResult<SelectionRequest> {
        Ok(self.request.clone())
    }
}
