//! Per-entity merge rules and identity keys.
//!
//! Incoming values are destructured so that adding a field to a model type
//! fails to compile until its merge rule is stated here.

use super::{
    Keyed, Merge, merge_keyed, merge_map, merge_matching, merge_set, overwrite_if_set,
    overwrite_non_empty,
};
use crate::model::{
    Domain, DomainConfig, Group, Project, ProjectEndpoint, Region, RoleAssignment,
    RoleInference, Service, ServiceEndpoint, Specification, User,
};

impl Merge for Specification {
    fn merge(&mut self, incoming: Self) {
        let Self {
            roles,
            role_inferences,
            regions,
            services,
            domains,
        } = incoming;
        merge_set(&mut self.roles, roles);
        merge_keyed(&mut self.role_inferences, role_inferences);
        merge_keyed(&mut self.regions, regions);
        merge_keyed(&mut self.services, services);
        merge_keyed(&mut self.domains, domains);
    }
}

impl Keyed for RoleInference {
    type Key<'a> = (&'a str, &'a str);

    fn key(&self) -> Self::Key<'_> {
        (&self.prior_role, &self.implied_role)
    }
}

impl Merge for RoleInference {
    // Both fields form the key; nothing further to merge.
    fn merge(&mut self, _incoming: Self) {}
}

impl Keyed for Region {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.id
    }
}

impl Merge for Region {
    fn merge(&mut self, incoming: Self) {
        let Self {
            id: _,
            description,
            parent_region_id,
        } = incoming;
        overwrite_if_set(&mut self.description, description);
        overwrite_if_set(&mut self.parent_region_id, parent_region_id);
    }
}

impl Keyed for Service {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

impl Merge for Service {
    fn merge(&mut self, incoming: Self) {
        let Self {
            name: _,
            service_type,
            description,
            enabled,
            endpoints,
        } = incoming;
        overwrite_if_set(&mut self.service_type, service_type);
        overwrite_if_set(&mut self.description, description);
        overwrite_if_set(&mut self.enabled, enabled);
        merge_keyed(&mut self.endpoints, endpoints);
    }
}

impl Keyed for ServiceEndpoint {
    type Key<'a> = (&'a str, &'a str);

    fn key(&self) -> Self::Key<'_> {
        (&self.region, &self.interface)
    }
}

impl Merge for ServiceEndpoint {
    fn merge(&mut self, incoming: Self) {
        let Self {
            region: _,
            interface: _,
            url,
            enabled,
        } = incoming;
        overwrite_non_empty(&mut self.url, url);
        overwrite_if_set(&mut self.enabled, enabled);
    }
}

impl Keyed for Domain {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

impl Merge for Domain {
    fn merge(&mut self, incoming: Self) {
        let Self {
            name: _,
            description,
            enabled,
            users,
            groups,
            projects,
            roles,
            config,
        } = incoming;
        overwrite_if_set(&mut self.description, description);
        overwrite_if_set(&mut self.enabled, enabled);
        merge_keyed(&mut self.users, users);
        merge_keyed(&mut self.groups, groups);
        merge_keyed(&mut self.projects, projects);
        merge_matching(&mut self.roles, roles, RoleAssignment::same_domain_grant);
        self.config.merge(config);
    }
}

impl Merge for DomainConfig {
    fn merge(&mut self, incoming: Self) {
        let Self {
            identity,
            cc_ad,
            ldap,
        } = incoming;
        merge_map(&mut self.identity, identity);
        merge_map(&mut self.cc_ad, cc_ad);
        merge_map(&mut self.ldap, ldap);
    }
}

impl Keyed for User {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

impl Merge for User {
    fn merge(&mut self, incoming: Self) {
        let Self {
            name: _,
            description,
            password,
            enabled,
            roles,
        } = incoming;
        overwrite_if_set(&mut self.description, description);
        overwrite_if_set(&mut self.password, password);
        overwrite_if_set(&mut self.enabled, enabled);
        merge_keyed(&mut self.roles, roles);
    }
}

impl Keyed for Group {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

impl Merge for Group {
    fn merge(&mut self, incoming: Self) {
        let Self {
            name: _,
            description,
            users,
            roles,
        } = incoming;
        overwrite_if_set(&mut self.description, description);
        merge_set(&mut self.users, users);
        merge_keyed(&mut self.roles, roles);
    }
}

impl Keyed for Project {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

impl Merge for Project {
    fn merge(&mut self, incoming: Self) {
        let Self {
            name: _,
            description,
            enabled,
            parent_id,
            is_domain,
            endpoints,
            roles,
        } = incoming;
        overwrite_if_set(&mut self.description, description);
        overwrite_if_set(&mut self.enabled, enabled);
        overwrite_if_set(&mut self.parent_id, parent_id);
        overwrite_if_set(&mut self.is_domain, is_domain);
        merge_keyed(&mut self.endpoints, endpoints);
        merge_keyed(&mut self.roles, roles);
    }
}

impl Keyed for ProjectEndpoint {
    type Key<'a> = (&'a str, &'a str);

    fn key(&self) -> Self::Key<'_> {
        (&self.region, &self.service)
    }
}

impl Merge for ProjectEndpoint {
    // Both fields form the key; nothing further to merge.
    fn merge(&mut self, _incoming: Self) {}
}

/// Full target tuple of a grant held by a user, group, or project.
impl Keyed for RoleAssignment {
    type Key<'a> = (
        &'a str,
        Option<&'a str>,
        Option<&'a str>,
        Option<&'a str>,
        Option<&'a str>,
    );

    fn key(&self) -> Self::Key<'_> {
        (
            &self.role,
            target(self.domain.as_deref()),
            target(self.project.as_deref()),
            target(self.user.as_deref()),
            target(self.group.as_deref()),
        )
    }
}

impl RoleAssignment {
    /// Whether two domain-level grants are the same entity: equal role, user,
    /// and group.
    #[must_use]
    pub fn same_domain_grant(&self, other: &Self) -> bool {
        self.role == other.role
            && target(self.user.as_deref()) == target(other.user.as_deref())
            && target(self.group.as_deref()) == target(other.group.as_deref())
    }
}

/// Grant target as it takes part in identity; `""` counts as unset.
fn target(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Merge for RoleAssignment {
    fn merge(&mut self, incoming: Self) {
        let Self {
            role: _,
            domain,
            project,
            group,
            user,
            inherited,
        } = incoming;
        overwrite_if_set(&mut self.domain, domain);
        overwrite_if_set(&mut self.project, project);
        overwrite_if_set(&mut self.group, group);
        overwrite_if_set(&mut self.user, user);
        overwrite_if_set(&mut self.inherited, inherited);
    }
}
