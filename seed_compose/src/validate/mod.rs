//! Structural validation of a single specification fragment.
//!
//! Validation runs depth-first over one fragment before it is merged and stops
//! at the first violation. The returned [`SeedError::Validation`] carries the
//! path to the offending entity so operators can find it in the seed.

mod path;

use std::sync::Arc;

use crate::model::{
    Domain, ENDPOINT_INTERFACES, Group, Project, RoleAssignment, Service, Specification, User,
};
use crate::{SeedError, SeedResult};

use self::path::EntityPath;

/// Which pair of targets a role assignment must choose between.
#[derive(Clone, Copy, Debug)]
enum GrantScope {
    /// Domain-level grants target a user or a group.
    Domain,
    /// Grants held by users, groups, and projects target a project or a domain.
    Holder,
}

/// Validate one fragment's specification.
///
/// # Errors
///
/// Returns [`SeedError::Validation`] describing the first rule violated.
///
/// # Examples
///
/// ```
/// use seed_compose::{Specification, validate};
///
/// let spec = Specification { roles: vec![String::new()], ..Specification::default() };
/// let err = validate(&spec).unwrap_err();
/// assert_eq!(err.to_string(), "specification: role with empty name");
/// ```
pub fn validate(spec: &Specification) -> SeedResult<()> {
    let root = EntityPath::default();
    for role in &spec.roles {
        require_name(&root, "role", role)?;
    }
    for inference in &spec.role_inferences {
        if inference.prior_role.is_empty() || inference.implied_role.is_empty() {
            return Err(fail(&root, "role inference with empty role"));
        }
    }
    for region in &spec.regions {
        require_name(&root, "region", &region.id)?;
    }
    for service in &spec.services {
        validate_service(&root, service)?;
    }
    for domain in &spec.domains {
        validate_domain(&root, domain)?;
    }
    Ok(())
}

fn fail(path: &EntityPath, message: impl Into<String>) -> Arc<SeedError> {
    SeedError::validation(path.to_string(), message)
}

fn require_name(path: &EntityPath, kind: &str, name: &str) -> SeedResult<()> {
    if name.is_empty() {
        return Err(fail(path, format!("{kind} with empty name")));
    }
    Ok(())
}

fn validate_service(parent: &EntityPath, service: &Service) -> SeedResult<()> {
    require_name(parent, "service", &service.name)?;
    let path = parent.child("service", &service.name);
    for endpoint in &service.endpoints {
        if endpoint.region.is_empty() {
            return Err(fail(&path, "endpoint with empty region"));
        }
        if !ENDPOINT_INTERFACES.contains(&endpoint.interface.as_str()) {
            return Err(fail(
                &path,
                format!(
                    "endpoint in region \"{}\" has invalid interface \"{}\" (expected one of {})",
                    endpoint.region,
                    endpoint.interface,
                    ENDPOINT_INTERFACES.join(", ")
                ),
            ));
        }
        if endpoint.url.is_empty() {
            return Err(fail(
                &path,
                format!(
                    "{} endpoint in region \"{}\" has no url",
                    endpoint.interface, endpoint.region
                ),
            ));
        }
    }
    Ok(())
}

fn validate_domain(parent: &EntityPath, domain: &Domain) -> SeedResult<()> {
    require_name(parent, "domain", &domain.name)?;
    let path = parent.child("domain", &domain.name);
    for user in &domain.users {
        validate_user(&path, user)?;
    }
    for group in &domain.groups {
        validate_group(&path, group)?;
    }
    for project in &domain.projects {
        validate_project(&path, project)?;
    }
    validate_grants(&path, &domain.roles, GrantScope::Domain)
}

fn validate_user(parent: &EntityPath, user: &User) -> SeedResult<()> {
    require_name(parent, "user", &user.name)?;
    validate_grants(&parent.child("user", &user.name), &user.roles, GrantScope::Holder)
}

fn validate_group(parent: &EntityPath, group: &Group) -> SeedResult<()> {
    require_name(parent, "group", &group.name)?;
    let path = parent.child("group", &group.name);
    for member in &group.users {
        require_name(&path, "member", member)?;
    }
    validate_grants(&path, &group.roles, GrantScope::Holder)
}

fn validate_project(parent: &EntityPath, project: &Project) -> SeedResult<()> {
    require_name(parent, "project", &project.name)?;
    let path = parent.child("project", &project.name);
    for endpoint in &project.endpoints {
        if endpoint.region.is_empty() || endpoint.service.is_empty() {
            return Err(fail(&path, "endpoint filter needs both region and service"));
        }
    }
    validate_grants(&path, &project.roles, GrantScope::Holder)
}

fn validate_grants(
    path: &EntityPath,
    grants: &[RoleAssignment],
    scope: GrantScope,
) -> SeedResult<()> {
    grants
        .iter()
        .try_for_each(|grant| validate_grant(path, grant, scope))
}

fn validate_grant(path: &EntityPath, grant: &RoleAssignment, scope: GrantScope) -> SeedResult<()> {
    if grant.role.is_empty() {
        return Err(fail(path, "role-assignment with no role"));
    }
    let (first, second, labels) = match scope {
        GrantScope::Domain => (&grant.user, &grant.group, ("user", "group")),
        GrantScope::Holder => (&grant.project, &grant.domain, ("project", "domain")),
    };
    match (is_set(first), is_set(second)) {
        (true, false) | (false, true) => Ok(()),
        (true, true) => Err(fail(
            path,
            format!(
                "role-assignment \"{}\" sets both {} and {}",
                grant.role, labels.0, labels.1
            ),
        )),
        (false, false) => Err(fail(
            path,
            format!(
                "role-assignment \"{}\" needs a {} or a {}",
                grant.role, labels.0, labels.1
            ),
        )),
    }
}

/// A target counts as set only when it names something.
fn is_set(target: &Option<String>) -> bool {
    target.as_deref().is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests;
