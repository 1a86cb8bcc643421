//! Service selections read from a text boundary.
//!
//! A [`SelectionRequest`] is whatever a boundary handed us: raw strings and a
//! note of where they came from. [`Selection::resolve`] turns it into a
//! [`Selection`] or reports every problem at once, so a user fixing a file
//! sees all bad entries in one pass.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    projection::{ServiceProjection, UnknownPolicy, resolve_projection},
    service::Service,
};

/// Unvalidated selection as read from a file, flag or payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Where the request came from (a path, `"<memory>"`, ...).
    pub origin: String,
    pub name: Option<String>,
    /// Raw slugs, in the order given.
    pub services: Vec<String>,
}

impl SelectionRequest {
    pub fn new<I, S>(origin: impl Into<String>, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin: origin.into(),
            name: None,
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A validated, ordered set of distinct services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    name: Option<String>,
    services: Vec<Service>,
}

impl Selection {
    /// Resolve every slug in `request` under `policy`.
    ///
    /// Order is preserved. Under [`UnknownPolicy::Fallback`] several
    /// unrecognised slugs collapse into one [`Service::Unknown`]; any other
    /// repeated service is a [`DomainError::DuplicateService`].
    pub fn resolve(request: SelectionRequest, policy: UnknownPolicy) -> Result<Self, DomainError> {
        if request.services.is_empty() {
            return Err(DomainError::EmptySelection {
                origin: request.origin,
            });
        }

        let mut seen = HashSet::with_capacity(request.services.len());
        let mut services = Vec::with_capacity(request.services.len());
        let mut problems = Vec::new();
        let mut literal_unknown = false;

        for raw in &request.services {
            let service = match resolve_projection(raw, policy) {
                Ok(service) => service,
                Err(err) => {
                    problems.push(err);
                    continue;
                }
            };

            // Only a repeated literal `unknown` is a duplicate; substituted
            // slugs share its slot in any order.
            let repeated = if service.is_unknown() {
                service.projection() == raw.as_str()
                    && std::mem::replace(&mut literal_unknown, true)
            } else {
                seen.contains(&service)
            };

            if repeated {
                problems.push(DomainError::DuplicateService {
                    service: service.to_string(),
                });
            } else if seen.insert(service) {
                services.push(service);
            }
        }

        if !problems.is_empty() {
            return Err(DomainError::InvalidSelection {
                origin: request.origin,
                problems,
            });
        }

        Ok(Self {
            name: request.name,
            services,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// The selection as slugs, in order.
    pub fn projections(&self) -> Vec<ServiceProjection> {
        self.services.iter().map(|s| s.projection()).collect()
    }

    pub fn contains(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
