//! External dependency requirements.
//!
//! A `Requirement` names an upstream package at a pinned version, plus the
//! sub-options that package must itself be built with. The resolver emits
//! requirements; the upstream catalog turns them into concrete packages.

use std::collections::BTreeSet;

use semver::Version;
use serde::Serialize;

/// A declared requirement on an external library package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Requirement {
    name: String,
    version: Version,

    /// Sub-options the upstream package must carry (e.g. hdf5 built with
    /// `zlib` and `hl`). Compared as a set; order never matters.
    features: BTreeSet<String>,
}

impl Requirement {
    /// Create a requirement with no imposed sub-options.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Requirement {
            name: name.into(),
            version,
            features: BTreeSet::new(),
        }
    }

    /// Add a required sub-option on the upstream package.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pinned version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the required sub-options.
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Whether a given sub-option is required.
    pub fn requires_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// The `name/version` package reference.
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    /// The `name::name` component reference exposed to consumers.
    pub fn component_ref(&self) -> String {
        format!("{}::{}", self.name, self.name)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reference())?;
        if !self.features.is_empty() {
            let features: Vec<&str> = self.features.iter().map(String::as_str).collect();
            write!(f, " [{}]", features.join(", "))?;
        }
        Ok(())
    }
}
