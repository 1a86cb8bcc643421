//! Service projection table.
//!
//! # Design
//!
//! Every service is paired with its external slug exactly once, in
//! [`PROJECTION_REGISTRY`]. The registry is compiled on first use into two
//! direction-indexed tables (a `Vec` indexed by [`Service::ordinal`] and a
//! `HashMap` keyed by slug) held in a process-wide [`LazyLock`]. Both lookups
//! are O(1) and never allocate.
//!
//! The build asserts the registry is a bijection and that every slug is
//! either the mechanical form of the internal name (lowercased, `_` → `-`)
//! or an explicitly marked rename. A broken registry panics on first access
//! rather than at the first unlucky lookup.
//!
//! # Unknown input
//!
//! [`ServiceProjection`] can only be obtained from the table, so
//! [`from_projection`] is total. Raw strings go through [`parse_projection`]
//! (rejects) or [`resolve_projection`] (caller picks an [`UnknownPolicy`]).
//! Lookups are exact: no trimming, no case-folding.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;
use crate::domain::service::Service;

// ── Registry ──────────────────────────────────────────────────────────────────

/// One `(service, slug)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionDef {
    /// The service this entry describes.
    pub service: Service,

    /// External slug. Part of the public contract; changing it is breaking.
    pub slug: &'static str,

    /// `true` when `slug` deliberately differs from the mechanical form of
    /// the internal name. The table build rejects unmarked deviations.
    pub renamed: bool,
}

impl ProjectionDef {
    /// Entry whose slug is the internal name lowercased with `_` → `-`.
    pub const fn mechanical(service: Service, slug: &'static str) -> Self {
        Self {
            service,
            slug,
            renamed: false,
        }
    }

    /// Entry with an explicit, non-derivable slug.
    pub const fn renamed(service: Service, slug: &'static str) -> Self {
        Self {
            service,
            slug,
            renamed: true,
        }
    }
}

/// Single source of truth for service slugs.
///
/// To add a service: add one entry here, in [`Service::ALL`] order.
pub static PROJECTION_REGISTRY: &[ProjectionDef] = &[
    ProjectionDef::mechanical(Service::AopLogging, "aop-logging"),
    ProjectionDef::mechanical(Service::Angular, "angular"),
    ProjectionDef::mechanical(Service::Download, "download"),
    ProjectionDef::mechanical(Service::Initialization, "initialization"),
    ProjectionDef::mechanical(Service::FrontendMavenPlugin, "frontend-maven-plugin"),
    ProjectionDef::mechanical(
        Service::JacocoCheckMinimalCoverage,
        "jacoco-check-minimal-coverage",
    ),
    ProjectionDef::mechanical(Service::JavaBase, "java-base"),
    ProjectionDef::mechanical(Service::Logstash, "logstash"),
    ProjectionDef::mechanical(Service::MavenJava, "maven-java"),
    ProjectionDef::mechanical(Service::MariaDb, "mariadb"),
    ProjectionDef::mechanical(Service::MySql, "mysql"),
    ProjectionDef::mechanical(Service::MongoDb, "mongodb"),
    ProjectionDef::mechanical(Service::Mongock, "mongock"),
    ProjectionDef::mechanical(Service::PostgreSql, "postgresql"),
    ProjectionDef::mechanical(Service::SonarJavaBackend, "sonar-java-backend"),
    ProjectionDef::mechanical(
        Service::SonarJavaBackendAndFrontend,
        "sonar-java-backend-and-frontend",
    ),
    // SPRINGBOOT* externalise with the product's two-word spelling.
    ProjectionDef::renamed(Service::SpringBoot, "spring-boot"),
    ProjectionDef::renamed(Service::SpringBootActuator, "spring-boot-actuator"),
    ProjectionDef::renamed(Service::SpringBootJwt, "spring-boot-jwt"),
    ProjectionDef::renamed(
        Service::SpringBootJwtWithBasicAuthentication,
        "spring-boot-jwt-with-basic-authentication",
    ),
    ProjectionDef::renamed(
        Service::SpringBootMvcWithTomcat,
        "spring-boot-mvc-with-tomcat",
    ),
    ProjectionDef::renamed(Service::SpringBootWebfluxNetty, "spring-boot-webflux-netty"),
    ProjectionDef::mechanical(Service::React, "react"),
    ProjectionDef::mechanical(Service::ReactStyled, "react-styled"),
    ProjectionDef::mechanical(Service::Vue, "vue"),
    ProjectionDef::mechanical(Service::VueStyled, "vue-styled"),
    ProjectionDef::mechanical(Service::Unknown, "unknown"),
];

// ── Table ─────────────────────────────────────────────────────────────────────

static TABLE: LazyLock<ProjectionTable> =
    LazyLock::new(|| ProjectionTable::build(PROJECTION_REGISTRY));

/// Both directions of the projection, compiled from one registry.
#[derive(Debug)]
pub struct ProjectionTable {
    forward: Vec<ServiceProjection>,
    reverse: HashMap<&'static str, Service>,
}

impl ProjectionTable {
    /// The process-wide table. Built on first access.
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Build from `registry`, panicking if it is not a valid bijection.
    fn build(registry: &[ProjectionDef]) -> Self {
        Self::try_build(registry)
            .unwrap_or_else(|reason| panic!("invalid projection registry: {reason}"))
    }

    /// Build from `registry`, or describe the first integrity violation.
    pub fn try_build(registry: &[ProjectionDef]) -> Result<Self, String> {
        if registry.len() != Service::COUNT {
            return Err(format!(
                "registry has {} entries but there are {} services",
                registry.len(),
                Service::COUNT
            ));
        }

        let mut forward: Vec<Option<ServiceProjection>> = vec![None; Service::COUNT];
        let mut reverse = HashMap::with_capacity(registry.len());

        for def in registry {
            if !is_well_formed(def.slug) {
                return Err(format!(
                    "slug '{}' for {} is not a lowercase, hyphen-delimited token",
                    def.slug,
                    def.service.name()
                ));
            }

            let derived = mechanical_slug(def.service.name());
            if def.renamed == (derived == def.slug) {
                return Err(if def.renamed {
                    format!(
                        "{} is marked renamed but '{}' is its mechanical slug",
                        def.service.name(),
                        def.slug
                    )
                } else {
                    format!(
                        "{} maps to '{}' but its mechanical slug is '{derived}'; mark it renamed",
                        def.service.name(),
                        def.slug
                    )
                });
            }

            let slot = &mut forward[def.service.ordinal()];
            if slot.is_some() {
                return Err(format!("duplicate service {}", def.service.name()));
            }
            *slot = Some(ServiceProjection(def.slug));

            if let Some(previous) = reverse.insert(def.slug, def.service) {
                return Err(format!(
                    "duplicate slug '{}' for {} and {}",
                    def.slug,
                    previous.name(),
                    def.service.name()
                ));
            }
        }

        let forward = forward
            .into_iter()
            .zip(Service::ALL)
            .map(|(slot, service)| {
                slot.ok_or_else(|| format!("missing slug for {}", service.name()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { forward, reverse })
    }

    /// Slug for `service`.
    pub fn forward(&self, service: Service) -> ServiceProjection {
        self.forward[service.ordinal()]
    }

    /// Service for an exact slug match.
    pub fn reverse(&self, slug: &str) -> Option<Service> {
        self.reverse.get(slug).copied()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

fn mechanical_slug(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "-")
}

fn is_well_formed(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Service → slug. Total.
pub fn to_projection(service: Service) -> ServiceProjection {
    ProjectionTable::global().forward(service)
}

/// Slug → service. Total over [`ServiceProjection`].
pub fn from_projection(projection: ServiceProjection) -> Service {
    ProjectionTable::global()
        .reverse(projection.as_str())
        .expect("a ServiceProjection always comes from the registry")
}

/// Raw string → service, rejecting anything outside the closed set.
pub fn parse_projection(slug: &str) -> Result<Service, DomainError> {
    ProjectionTable::global()
        .reverse(slug)
        .ok_or_else(|| unknown_projection(slug))
}

/// Raw string → service under an explicit policy for unrecognised input.
pub fn resolve_projection(slug: &str, policy: UnknownPolicy) -> Result<Service, DomainError> {
    match policy {
        UnknownPolicy::Reject => parse_projection(slug),
        UnknownPolicy::Fallback => Ok(ProjectionTable::global()
            .reverse(slug)
            .unwrap_or(Service::Unknown)),
    }
}

fn unknown_projection(value: &str) -> DomainError {
    DomainError::UnknownProjection {
        value: value.to_owned(),
        suggestion: ServiceProjection::suggest(value).map(|p| p.as_str()),
    }
}

// ── ServiceProjection ─────────────────────────────────────────────────────────

/// External slug of a [`Service`].
///
/// Only the table hands these out, so a value of this type is always a
/// member of the closed slug set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceProjection(&'static str);

impl ServiceProjection {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The service this slug names.
    pub fn service(self) -> Service {
        from_projection(self)
    }

    /// Every slug, in registry order.
    pub fn all() -> impl Iterator<Item = ServiceProjection> {
        Service::ALL.into_iter().map(to_projection)
    }

    /// Every slug as plain strings, for help and error output.
    pub fn accepted() -> Vec<&'static str> {
        Self::all().map(|p| p.as_str()).collect()
    }

    /// Best guess for a near-miss, for diagnostics only.
    ///
    /// Trims, lowercases and turns `_`/spaces into `-`, then looks for an
    /// exact match. Lookups never apply this.
    pub fn suggest(input: &str) -> Option<ServiceProjection> {
        let normalized: String = input
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        if normalized == input {
            return None;
        }
        ProjectionTable::global()
            .reverse(&normalized)
            .map(to_projection)
    }
}

impl fmt::Display for ServiceProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ServiceProjection {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for ServiceProjection {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ServiceProjection {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for ServiceProjection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_projection(s).map(to_projection)
    }
}

impl From<Service> for ServiceProjection {
    fn from(service: Service) -> Self {
        to_projection(service)
    }
}

impl From<ServiceProjection> for Service {
    fn from(projection: ServiceProjection) -> Self {
        from_projection(projection)
    }
}

// ── Serde: both types travel as the slug ──────────────────────────────────────

impl Serialize for ServiceProjection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for ServiceProjection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.projection().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ServiceProjection::deserialize(deserializer).map(from_projection)
    }
}

// ── UnknownPolicy ─────────────────────────────────────────────────────────────

/// What to do with a slug outside the closed set.
///
/// Deserialises through [`FromStr`], so config files and env vars accept the
/// same spellings as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnknownPolicy {
    /// Fail with [`DomainError::UnknownProjection`].
    #[default]
    Reject,
    /// Substitute [`Service::Unknown`].
    Fallback,
}

impl UnknownPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(Self::Reject),
            "fallback" | "unknown" => Ok(Self::Fallback),
            other => Err(DomainError::InvalidPolicy {
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for UnknownPolicy {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
