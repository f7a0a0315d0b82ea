//! Unit tests for fragment validation rules.

use rstest::rstest;

use super::validate;
use crate::SeedError;
use crate::model::{
    Domain, Group, Project, ProjectEndpoint, RoleAssignment, Service, ServiceEndpoint,
    Specification, User,
};

fn domain_with_grant(grant: RoleAssignment) -> Specification {
    Specification {
        domains: vec![Domain {
            name: "x".into(),
            roles: vec![grant],
            ..Domain::default()
        }],
        ..Specification::default()
    }
}

fn project_with_grant(grant: RoleAssignment) -> Specification {
    Specification {
        domains: vec![Domain {
            name: "x".into(),
            projects: vec![Project {
                name: "y".into(),
                roles: vec![grant],
                ..Project::default()
            }],
            ..Domain::default()
        }],
        ..Specification::default()
    }
}

fn service_with_endpoint(interface: &str, url: &str) -> Specification {
    Specification {
        services: vec![Service {
            name: "keystone".into(),
            endpoints: vec![ServiceEndpoint {
                region: "eu-de-1".into(),
                interface: interface.into(),
                url: url.into(),
                enabled: None,
            }],
            ..Service::default()
        }],
        ..Specification::default()
    }
}

fn message_of(spec: &Specification) -> String {
    let err = validate(spec).expect_err("validation should fail");
    assert!(
        matches!(err.as_ref(), SeedError::Validation { .. }),
        "unexpected error variant: {err:?}"
    );
    err.to_string()
}

#[test]
fn empty_specification_is_valid() {
    assert!(validate(&Specification::default()).is_ok());
}

#[rstest]
#[case::user(RoleAssignment::new("member").for_user("u"))]
#[case::group(RoleAssignment::new("member").for_group("g"))]
fn domain_grant_with_one_target_is_valid(#[case] grant: RoleAssignment) {
    assert!(validate(&domain_with_grant(grant)).is_ok());
}

#[rstest]
#[case::both(RoleAssignment::new("member").for_user("u").for_group("g"), "sets both user and group")]
#[case::neither(RoleAssignment::new("member"), "needs a user or a group")]
#[case::no_role(RoleAssignment::new("").for_user("u"), "role-assignment with no role")]
#[case::empty_target(RoleAssignment::new("member").for_user(""), "needs a user or a group")]
fn domain_grant_rejections(#[case] grant: RoleAssignment, #[case] expected: &str) {
    let message = message_of(&domain_with_grant(grant));
    assert!(message.starts_with(r#"domain "x": "#), "got {message}");
    assert!(message.contains(expected), "got {message}");
}

#[test]
fn project_grant_without_role_names_the_path() {
    let message = message_of(&project_with_grant(RoleAssignment::new("").on_project("y")));
    assert_eq!(message, r#"domain "x", project "y": role-assignment with no role"#);
}

#[rstest]
#[case::both(RoleAssignment::new("admin").on_project("p").on_domain("d"), "sets both project and domain")]
#[case::neither(RoleAssignment::new("admin").for_user("u"), "needs a project or a domain")]
fn holder_grant_rejections(#[case] grant: RoleAssignment, #[case] expected: &str) {
    let message = message_of(&project_with_grant(grant));
    assert!(message.contains(expected), "got {message}");
}

#[test]
fn user_and_group_grants_use_holder_scope() {
    let spec = Specification {
        domains: vec![Domain {
            name: "x".into(),
            users: vec![User {
                name: "u".into(),
                roles: vec![RoleAssignment::new("admin").on_domain("x")],
                ..User::default()
            }],
            groups: vec![Group {
                name: "g".into(),
                users: vec!["u".into()],
                roles: vec![RoleAssignment::new("admin").for_user("u")],
                ..Group::default()
            }],
            ..Domain::default()
        }],
        ..Specification::default()
    };
    let message = message_of(&spec);
    assert!(message.starts_with(r#"domain "x", group "g": "#), "got {message}");
}

#[rstest]
#[case("admin")]
#[case("public")]
#[case("internal")]
fn known_interfaces_are_accepted(#[case] interface: &str) {
    assert!(validate(&service_with_endpoint(interface, "https://identity")).is_ok());
}

#[test]
fn bogus_interface_is_rejected() {
    let message = message_of(&service_with_endpoint("bogus", "https://identity"));
    assert!(message.starts_with(r#"service "keystone": "#), "got {message}");
    assert!(message.contains("invalid interface \"bogus\""), "got {message}");
}

#[test]
fn endpoint_without_url_is_rejected() {
    let message = message_of(&service_with_endpoint("public", ""));
    assert!(message.contains("has no url"), "got {message}");
}

#[rstest]
#[case::role(Specification { roles: vec![String::new()], ..Specification::default() }, "role with empty name")]
#[case::domain(Specification { domains: vec![Domain::default()], ..Specification::default() }, "domain with empty name")]
#[case::service(Specification { services: vec![Service::default()], ..Specification::default() }, "service with empty name")]
fn empty_names_are_rejected(#[case] spec: Specification, #[case] expected: &str) {
    assert_eq!(message_of(&spec), format!("specification: {expected}"));
}

#[test]
fn project_endpoint_filter_needs_both_fields() {
    let spec = Specification {
        domains: vec![Domain {
            name: "x".into(),
            projects: vec![Project {
                name: "y".into(),
                endpoints: vec![ProjectEndpoint {
                    region: "eu-de-1".into(),
                    service: String::new(),
                }],
                ..Project::default()
            }],
            ..Domain::default()
        }],
        ..Specification::default()
    };
    assert!(message_of(&spec).contains("endpoint filter"));
}

#[test]
fn validation_does_not_mutate_input() {
    let spec = domain_with_grant(RoleAssignment::new("member").for_user("u"));
    let before = spec.clone();
    validate(&spec).expect("valid grant");
    assert_eq!(spec, before);
}
