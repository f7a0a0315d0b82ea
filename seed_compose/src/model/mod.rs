//! Data model for seeds and the identity-domain specification they carry.
//!
//! Optional scalar fields use [`Option`] to signal "was set"; the merger only
//! overwrites a field when the incoming fragment sets it.

mod identity;
mod name;
mod seed;
mod spec;

pub use identity::{Domain, DomainConfig, Group, Project, ProjectEndpoint, RoleAssignment, User};
pub use name::{NAMESPACE_SEPARATOR, QualifiedName};
pub use seed::Seed;
pub use spec::{
    ENDPOINT_INTERFACES, Region, RoleInference, Service, ServiceEndpoint, Specification,
};
