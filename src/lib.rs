//! Slipway - a recipe-driven configure, build, and package pipeline for
//! the netCDF-C library.
//!
//! The heart of the crate is the option resolver: it normalizes a set of
//! feature options against a target platform, validates the combination in
//! two stages, and turns it into dependency requirements, CMake flags, and
//! consumer-facing package metadata. Everything around it (CMake
//! invocation, install-tree pruning) is thin glue over external tools.

pub mod builder;
pub mod core;
pub mod registry;
pub mod resolver;

pub use self::core::{
    descriptor::PackageDescriptor,
    options::OptionSet,
    platform::{Compiler, CrtLinkage, Os, Platform},
    profile::Profile,
    requirement::Requirement,
};

pub use self::builder::{BuildContext, Recipe};
pub use self::registry::{Catalog, ResolvedDependency, SupportedCatalog};
pub use self::resolver::{resolve, BuildFlagSet, ConfigurationError, FlagValue, Resolution};
