//! Selection files on disk, discovered and validated end to end.

use std::fs;

use tempfile::TempDir;
use trellis_adapters::{FileSelectionSource, discover};
use trellis_core::prelude::*;

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("backend")).unwrap();
    fs::write(
        root.join("backend/api.toml"),
        r#"
name = "api"
services = ["java-base", "maven-java", "spring-boot", "spring-boot-jwt", "postgresql"]
"#,
    )
    .unwrap();
    fs::write(
        root.join("frontend.json"),
        r#"{ "name": "web", "services": ["angular", "frontend-maven-plugin"] }"#,
    )
    .unwrap();
    fs::write(
        root.join("legacy.toml"),
        "services = [\"springboot\", \"mariadb\", \"cobol\"]\n",
    )
    .unwrap();
    temp
}

fn load_all(policy: UnknownPolicy, temp: &TempDir) -> Vec<TrellisResult<Selection>> {
    let service = SelectionService::new(policy);
    discover(temp.path())
        .unwrap()
        .iter()
        .map(|path| service.load(&FileSelectionSource::new(path)))
        .collect()
}

#[test]
fn discovered_files_are_sorted() {
    let temp = workspace();
    let names: Vec<_> = discover(temp.path())
        .unwrap()
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["backend/api.toml", "frontend.json", "legacy.toml"]);
}

#[test]
fn strict_policy_flags_only_the_legacy_file() {
    let temp = workspace();
    let results = load_all(UnknownPolicy::Reject, &temp);

    let api = results[0].as_ref().unwrap();
    assert_eq!(api.name(), Some("api"));
    assert!(api.contains(Service::SpringBootJwt));
    assert_eq!(api.len(), 5);

    let web = results[1].as_ref().unwrap();
    assert_eq!(
        web.services(),
        &[Service::Angular, Service::FrontendMavenPlugin]
    );

    let Err(TrellisError::Domain(DomainError::InvalidSelection { problems, .. })) = &results[2]
    else {
        panic!("legacy.toml should be invalid");
    };
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().all(|p| matches!(p, DomainError::UnknownProjection { .. })));
}

#[test]
fn fallback_policy_accepts_the_legacy_file() {
    let temp = workspace();
    let results = load_all(UnknownPolicy::Fallback, &temp);

    let legacy = results[2].as_ref().unwrap();
    assert_eq!(legacy.services(), &[Service::Unknown, Service::MariaDb]);
}
