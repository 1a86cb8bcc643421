//! Laws of the service ↔ slug table, checked through the public API.

use std::collections::HashSet;

use trellis_core::prelude::*;

#[test]
fn forward_then_reverse_is_identity() {
    for service in Service::ALL {
        assert_eq!(from_projection(to_projection(service)), service);
    }
}

#[test]
fn reverse_then_forward_is_identity() {
    for projection in ServiceProjection::all() {
        assert_eq!(to_projection(from_projection(projection)), projection);
    }
}

#[test]
fn forward_is_injective() {
    let slugs: HashSet<_> = Service::ALL.iter().map(|s| to_projection(*s)).collect();
    assert_eq!(slugs.len(), Service::COUNT);
}

#[test]
fn raw_slugs_parse_to_their_service() {
    for service in Service::ALL {
        let slug = to_projection(service).as_str();
        assert_eq!(parse_projection(slug).unwrap(), service);
    }
}

#[test]
fn literal_pairs() {
    let cases = [
        (Service::AopLogging, "aop-logging"),
        (Service::JacocoCheckMinimalCoverage, "jacoco-check-minimal-coverage"),
        (Service::MariaDb, "mariadb"),
        (Service::PostgreSql, "postgresql"),
        (Service::SpringBoot, "spring-boot"),
        (
            Service::SpringBootJwtWithBasicAuthentication,
            "spring-boot-jwt-with-basic-authentication",
        ),
        (Service::SpringBootWebfluxNetty, "spring-boot-webflux-netty"),
        (Service::VueStyled, "vue-styled"),
        (Service::Unknown, "unknown"),
    ];

    for (service, slug) in cases {
        assert_eq!(to_projection(service), slug, "{}", service.name());
        assert_eq!(parse_projection(slug).unwrap(), service);
    }
}

#[test]
fn internal_name_is_not_a_slug() {
    let err = parse_projection("SPRINGBOOT").unwrap_err();
    assert!(matches!(err, DomainError::UnknownProjection { .. }));
    assert!(parse_projection("springboot").is_err());
}

#[test]
fn unrecognised_input_under_each_policy() {
    let err = resolve_projection("not-a-real-service", UnknownPolicy::Reject).unwrap_err();
    assert_eq!(err.to_string(), "unknown service projection 'not-a-real-service'");

    assert_eq!(
        resolve_projection("not-a-real-service", UnknownPolicy::Fallback).unwrap(),
        Service::Unknown
    );
    assert_eq!(
        resolve_projection("", UnknownPolicy::Fallback).unwrap(),
        Service::Unknown
    );
}

#[test]
fn global_table_is_shared() {
    let a = trellis_core::domain::ProjectionTable::global();
    let b = trellis_core::domain::ProjectionTable::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), Service::COUNT);
}

#[test]
fn concurrent_first_access_agrees() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let service = Service::ALL[i * 3 % Service::COUNT];
                from_projection(to_projection(service)) == service
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
