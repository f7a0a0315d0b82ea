//! Top-level specification tree: roles, regions, and service catalogue.

use serde::{Deserialize, Serialize};

use super::Domain;

/// Endpoint interfaces accepted by the service catalogue.
pub const ENDPOINT_INTERFACES: [&str; 3] = ["admin", "public", "internal"];

/// A consolidated or partial identity-domain specification.
///
/// Every collection defaults to empty so a fragment only carries the parts it
/// contributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Role names; treated as a set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// Implied-role rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_inferences: Vec<RoleInference>,
    /// Regions keyed by id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    /// Catalogue services keyed by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    /// Identity domains keyed by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Domain>,
}

impl Specification {
    /// Whether the specification contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A rule stating that holding `prior_role` implies `implied_role`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInference {
    /// Role that triggers the inference.
    #[serde(default)]
    pub prior_role: String,
    /// Role granted implicitly.
    #[serde(default)]
    pub implied_role: String,
}

/// A catalogue region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier.
    #[serde(default)]
    pub id: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent region identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_region_id: Option<String>,
}

/// A catalogue service with its endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service name.
    #[serde(default)]
    pub name: String,
    /// Service type, for example `identity` or `compute`.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_type: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the service is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Endpoints keyed by region and interface.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<ServiceEndpoint>,
}

/// A service endpoint in one region for one interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Region the endpoint lives in.
    #[serde(default)]
    pub region: String,
    /// One of [`ENDPOINT_INTERFACES`].
    #[serde(default)]
    pub interface: String,
    /// Endpoint URL.
    #[serde(default)]
    pub url: String,
    /// Whether the endpoint is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
