//! The closed set of services a generated project can be assembled from.
//!
//! # Design
//!
//! `Service` is a pure identity type: `Copy`, equality-by-value, no data. It
//! knows its own internal name and nothing else. The external slug lives in
//! `projection.rs`, which is the single place that pairs the two.
//!
//! # Adding a New Service
//!
//! 1. Add the enum variant here
//! 2. Add it to [`Service::ALL`] and the `name` match
//! 3. Add one entry to `PROJECTION_REGISTRY` in `projection.rs`
//! 4. Done: the table build asserts nothing was missed

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::projection::{self, ServiceProjection};

/// A selectable capability offered by the project generator.
///
/// Variant order is the registry order; [`Service::ordinal`] indexes the
/// forward projection table, so `ALL` must list variants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    AopLogging,
    Angular,
    Download,
    Initialization,
    FrontendMavenPlugin,
    JacocoCheckMinimalCoverage,
    JavaBase,
    Logstash,
    MavenJava,
    MariaDb,
    MySql,
    MongoDb,
    Mongock,
    PostgreSql,
    SonarJavaBackend,
    SonarJavaBackendAndFrontend,
    SpringBoot,
    SpringBootActuator,
    SpringBootJwt,
    SpringBootJwtWithBasicAuthentication,
    SpringBootMvcWithTomcat,
    SpringBootWebfluxNetty,
    React,
    ReactStyled,
    Vue,
    VueStyled,
    /// Sentinel used as a default/fallback, never as an error.
    Unknown,
}

impl Service {
    /// Every service, in declaration order.
    pub const ALL: [Service; 27] = [
        Self::AopLogging,
        Self::Angular,
        Self::Download,
        Self::Initialization,
        Self::FrontendMavenPlugin,
        Self::JacocoCheckMinimalCoverage,
        Self::JavaBase,
        Self::Logstash,
        Self::MavenJava,
        Self::MariaDb,
        Self::MySql,
        Self::MongoDb,
        Self::Mongock,
        Self::PostgreSql,
        Self::SonarJavaBackend,
        Self::SonarJavaBackendAndFrontend,
        Self::SpringBoot,
        Self::SpringBootActuator,
        Self::SpringBootJwt,
        Self::SpringBootJwtWithBasicAuthentication,
        Self::SpringBootMvcWithTomcat,
        Self::SpringBootWebfluxNetty,
        Self::React,
        Self::ReactStyled,
        Self::Vue,
        Self::VueStyled,
        Self::Unknown,
    ];

    /// Number of services in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Internal identifier, e.g. `SPRINGBOOT_JWT`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AopLogging => "AOP_LOGGING",
            Self::Angular => "ANGULAR",
            Self::Download => "DOWNLOAD",
            Self::Initialization => "INITIALIZATION",
            Self::FrontendMavenPlugin => "FRONTEND_MAVEN_PLUGIN",
            Self::JacocoCheckMinimalCoverage => "JACOCO_CHECK_MINIMAL_COVERAGE",
            Self::JavaBase => "JAVA_BASE",
            Self::Logstash => "LOGSTASH",
            Self::MavenJava => "MAVEN_JAVA",
            Self::MariaDb => "MARIADB",
            Self::MySql => "MYSQL",
            Self::MongoDb => "MONGODB",
            Self::Mongock => "MONGOCK",
            Self::PostgreSql => "POSTGRESQL",
            Self::SonarJavaBackend => "SONAR_JAVA_BACKEND",
            Self::SonarJavaBackendAndFrontend => "SONAR_JAVA_BACKEND_AND_FRONTEND",
            Self::SpringBoot => "SPRINGBOOT",
            Self::SpringBootActuator => "SPRINGBOOT_ACTUATOR",
            Self::SpringBootJwt => "SPRINGBOOT_JWT",
            Self::SpringBootJwtWithBasicAuthentication => {
                "SPRINGBOOT_JWT_WITH_BASIC_AUTHENTICATION"
            }
            Self::SpringBootMvcWithTomcat => "SPRINGBOOT_MVC_WITH_TOMCAT",
            Self::SpringBootWebfluxNetty => "SPRINGBOOT_WEBFLUX_NETTY",
            Self::React => "REACT",
            Self::ReactStyled => "REACT_STYLED",
            Self::Vue => "VUE",
            Self::VueStyled => "VUE_STYLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Position in [`Service::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether this is the `UNKNOWN` sentinel.
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Parse an internal name. Exact match only, no case-folding.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|service| service.name() == name)
            .ok_or_else(|| DomainError::UnknownService {
                name: name.to_owned(),
            })
    }

    /// External slug for this service.
    ///
    /// Delegates to `projection::to_projection`.
    pub fn projection(self) -> ServiceProjection {
        projection::to_projection(self)
    }
}

/// Services display as their slug, the form every boundary speaks.
impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.projection().as_str())
    }
}

/// Parses an external slug. Use [`Service::from_name`] for internal names.
impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        projection::parse_projection(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails to compile when a variant is added without updating this match,
    /// which is the reminder to extend `ALL`.
    fn declared(service: Service) -> usize {
        match service {
            Service::AopLogging
            | Service::Angular
            | Service::Download
            | Service::Initialization
            | Service::FrontendMavenPlugin
            | Service::JacocoCheckMinimalCoverage
            | Service::JavaBase
            | Service::Logstash
            | Service::MavenJava
            | Service::MariaDb
            | Service::MySql
            | Service::MongoDb
            | Service::Mongock
            | Service::PostgreSql
            | Service::SonarJavaBackend
            | Service::SonarJavaBackendAndFrontend
            | Service::SpringBoot
            | Service::SpringBootActuator
            | Service::SpringBootJwt
            | Service::SpringBootJwtWithBasicAuthentication
            | Service::SpringBootMvcWithTomcat
            | Service::SpringBootWebfluxNetty
            | Service::React
            | Service::ReactStyled
            | Service::Vue
            | Service::VueStyled
            | Service::Unknown => service.ordinal(),
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (index, service) in Service::ALL.iter().enumerate() {
            assert_eq!(declared(*service), index, "{service:?} out of order");
        }
        assert_eq!(Service::COUNT, Service::Unknown.ordinal() + 1);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Service::ALL.iter().map(Service::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Service::COUNT);
    }

    #[test]
    fn from_name_round_trips() {
        for service in Service::ALL {
            assert_eq!(Service::from_name(service.name()).unwrap(), service);
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert!(matches!(
            Service::from_name("springboot"),
            Err(DomainError::UnknownService { .. })
        ));
        assert!(Service::from_name(" SPRINGBOOT").is_err());
    }

    #[test]
    fn display_is_the_slug() {
        assert_eq!(Service::SpringBoot.to_string(), "spring-boot");
        assert_eq!(Service::MariaDb.to_string(), "mariadb");
    }

    #[test]
    fn from_str_parses_slugs_not_names() {
        assert_eq!("vue-styled".parse::<Service>().unwrap(), Service::VueStyled);
        assert!("VUE_STYLED".parse::<Service>().is_err());
    }

    #[test]
    fn only_unknown_is_the_sentinel() {
        assert!(Service::Unknown.is_unknown());
        assert_eq!(
            Service::ALL.iter().filter(|s| s.is_unknown()).count(),
            1
        );
    }
}
