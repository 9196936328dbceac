//! Upstream package catalog.
//!
//! The catalog is the seam to the binary package registry: given a
//! requirement, it reports how the upstream package is actually configured.
//! The resolver never installs anything; it only needs the dependency's own
//! option set for the second validation pass.

use std::collections::BTreeSet;

use semver::Version;

use crate::core::requirement::Requirement;

/// A requirement resolved to a concrete upstream package configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    name: String,
    version: Version,

    /// Sub-options the upstream package was built with.
    enabled: BTreeSet<String>,
}

impl ResolvedDependency {
    /// Describe an upstream package configuration.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        ResolvedDependency {
            name: name.into(),
            version,
            enabled: BTreeSet::new(),
        }
    }

    /// Mark a sub-option as enabled in the upstream build.
    pub fn with_enabled(mut self, feature: impl Into<String>) -> Self {
        self.enabled.insert(feature.into());
        self
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the package version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Whether the upstream build carries a given sub-option.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.enabled.contains(feature)
    }
}

/// Resolves requirement names to upstream package configurations.
pub trait Catalog {
    /// Look up the package satisfying a requirement's name and version.
    ///
    /// Returns `None` when the catalog carries no such package. The caller
    /// decides whether the requirement's sub-options are actually met.
    fn resolve(&self, requirement: &Requirement) -> Option<ResolvedDependency>;
}

/// The currently supported upstream catalog.
///
/// hdf5 ships built with `zlib` and `hl` but never `parallel`; that absence
/// is what makes parallel IO requests fail the second validation pass.
#[derive(Debug, Clone)]
pub struct SupportedCatalog {
    entries: Vec<ResolvedDependency>,
}

impl SupportedCatalog {
    /// Create the catalog of supported upstream packages.
    pub fn new() -> Self {
        SupportedCatalog {
            entries: vec![
                ResolvedDependency::new("hdf4", Version::new(4, 2, 15)),
                ResolvedDependency::new("hdf5", Version::new(1, 12, 0))
                    .with_enabled("zlib")
                    .with_enabled("hl"),
                ResolvedDependency::new("libcurl", Version::new(7, 70, 0)),
                ResolvedDependency::new("openmpi", Version::new(4, 1, 0)),
            ],
        }
    }
}

impl Default for SupportedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for SupportedCatalog {
    fn resolve(&self, requirement: &Requirement) -> Option<ResolvedDependency> {
        self.entries
            .iter()
            .find(|entry| {
                entry.name() == requirement.name() && entry.version() == requirement.version()
            })
            .cloned()
    }
}
