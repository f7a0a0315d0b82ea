//! Fluent construction of seeds for tests.
//!
//! ```
//! use seed_compose_test_helpers::SeedBuilder;
//!
//! let seed = SeedBuilder::new("ops/app")
//!     .depends_on("base")
//!     .role("member")
//!     .build();
//! assert_eq!(seed.qualified_name().to_string(), "ops/app");
//! assert_eq!(seed.dependencies(), ["base"]);
//! ```

use seed_compose::model::{Domain, Region, Service};
use seed_compose::{DEFAULT_NAMESPACE, QualifiedName, Seed, Specification};

/// Builder for [`Seed`] values.
#[derive(Clone, Debug)]
#[must_use]
pub struct SeedBuilder {
    name: QualifiedName,
    dependencies: Vec<String>,
    spec: Specification,
}

impl SeedBuilder {
    /// Start a seed named `reference`; bare names use the default namespace.
    pub fn new(reference: &str) -> Self {
        Self {
            name: QualifiedName::qualify(reference, DEFAULT_NAMESPACE),
            dependencies: Vec::new(),
            spec: Specification::default(),
        }
    }

    /// Declare a dependency reference.
    pub fn depends_on(mut self, reference: impl Into<String>) -> Self {
        self.dependencies.push(reference.into());
        self
    }

    /// Add a top-level role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.spec.roles.push(role.into());
        self
    }

    /// Add a region with only an id.
    pub fn region(mut self, id: impl Into<String>) -> Self {
        self.spec.regions.push(Region {
            id: id.into(),
            ..Region::default()
        });
        self
    }

    /// Add a service.
    pub fn service(mut self, service: Service) -> Self {
        self.spec.services.push(service);
        self
    }

    /// Add a domain.
    pub fn domain(mut self, domain: Domain) -> Self {
        self.spec.domains.push(domain);
        self
    }

    /// Replace the whole specification.
    pub fn spec(mut self, spec: Specification) -> Self {
        self.spec = spec;
        self
    }

    /// Finish the seed.
    #[must_use]
    pub fn build(self) -> Seed {
        Seed::new(self.name, self.spec).with_dependencies(self.dependencies)
    }
}
