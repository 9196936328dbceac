//! Consumer-facing package metadata.
//!
//! The descriptor is purely declarative: it tells downstream builds what
//! the produced artifact is called, what it links against, and which
//! preprocessor defines consumers must set. It performs no I/O.

use serde::Serialize;

/// Declarative metadata describing the built artifact to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    /// Logical component name.
    pub component: String,

    /// Name exported to CMake find-package consumers.
    pub cmake_name: String,

    /// Name exported to pkg-config consumers.
    pub pkg_config_name: String,

    /// Libraries produced by the build.
    pub libs: Vec<String>,

    /// Upstream components this package links against, as `pkg::component`
    /// references.
    pub requires: Vec<String>,

    /// System libraries consumers must link.
    pub system_libs: Vec<String>,

    /// Preprocessor defines consumers must set.
    pub defines: Vec<String>,
}

impl PackageDescriptor {
    /// Create an empty descriptor for a component.
    pub fn new(component: impl Into<String>) -> Self {
        PackageDescriptor {
            component: component.into(),
            cmake_name: String::new(),
            pkg_config_name: String::new(),
            libs: Vec::new(),
            requires: Vec::new(),
            system_libs: Vec::new(),
            defines: Vec::new(),
        }
    }
}

impl std::fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "component: {}", self.component)?;
        writeln!(f, "cmake:     {}", self.cmake_name)?;
        writeln!(f, "pkgconfig: {}", self.pkg_config_name)?;
        writeln!(f, "libs:      {}", self.libs.join(", "))?;
        writeln!(f, "requires:  {}", self.requires.join(", "))?;
        writeln!(f, "system:    {}", self.system_libs.join(", "))?;
        write!(f, "defines:   {}", self.defines.join(", "))
    }
}
