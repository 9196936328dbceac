//! Build lifecycle driver.
//!
//! A `Recipe` ties one resolved configuration to the external collaborators
//! that act on it: the CMake configure step and the install-tree packaging
//! step. The recipe itself never fetches sources or compiles anything; it
//! only decides and delegates.

pub mod cmake;
pub mod install;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::descriptor::PackageDescriptor;
use crate::core::options::OptionSet;
use crate::core::platform::Platform;
use crate::registry::Catalog;
use crate::resolver::{self, describe_package, Resolution};

/// Upstream package name.
pub const PACKAGE_NAME: &str = "netcdf-c";

/// Upstream library version this recipe revision builds.
pub const UPSTREAM_VERSION: &str = "4.7.4";

/// Upstream license identifier.
pub const LICENSE: &str = "BSD-3-Clause";

/// Upstream project homepage.
pub const HOMEPAGE: &str = "https://github.com/Unidata/netcdf-c";

/// Directory layout and mode for one external build.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Unpacked upstream source tree
    pub source_dir: PathBuf,
    /// Out-of-tree build directory
    pub build_dir: PathBuf,
    /// Install prefix the package tree lands in
    pub install_prefix: PathBuf,
    /// Release build (Debug otherwise)
    pub release: bool,
    /// CMake generator override
    pub generator: Option<String>,
}

impl BuildContext {
    /// Create a build context.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        install_prefix: impl Into<PathBuf>,
    ) -> Self {
        BuildContext {
            source_dir: source_dir.into(),
            build_dir: build_dir.into(),
            install_prefix: install_prefix.into(),
            release: false,
            generator: None,
        }
    }

    /// Set release mode.
    pub fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    /// Set the CMake generator.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }
}

/// One resolved build of the netCDF-C package.
#[derive(Debug, Clone)]
pub struct Recipe {
    resolution: Resolution,
}

impl Recipe {
    /// Resolve a recipe for the given options and platform.
    ///
    /// Runs the full resolution pipeline; an invalid option combination
    /// fails here, before any collaborator is touched.
    pub fn resolve(
        options: OptionSet,
        platform: Platform,
        catalog: &dyn Catalog,
    ) -> Result<Self, resolver::ConfigurationError> {
        let resolution = resolver::resolve(options, platform, catalog)?;
        Ok(Recipe { resolution })
    }

    /// The resolved configuration.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The CMake argument vector for the configure step.
    pub fn configure_args(&self, ctx: &BuildContext) -> Vec<String> {
        cmake::configure_args(&self.resolution, ctx)
    }

    /// Run the external CMake configure step.
    pub fn configure(&self, ctx: &BuildContext) -> Result<()> {
        cmake::configure(&self.resolution, ctx)
    }

    /// Prune build-system metadata from an installed tree and describe the
    /// resulting package to consumers.
    pub fn package(&self, install_prefix: &Path) -> Result<PackageDescriptor> {
        install::prune_package_tree(install_prefix)?;
        let libs = install::collect_libs(install_prefix);
        Ok(describe_package(
            &self.resolution.options,
            &self.resolution.platform,
            libs,
        ))
    }

    /// Describe the package without inspecting an installed tree, using
    /// the conventional library name.
    pub fn describe(&self) -> PackageDescriptor {
        describe_package(
            &self.resolution.options,
            &self.resolution.platform,
            vec!["netcdf".to_string()],
        )
    }
}
