//! Two-stage configuration validation.
//!
//! Stage 1 (`validate`) checks the invariants between the user's own
//! options and runs before any requirement is declared. Stage 2
//! (`validate_resolved`) runs once the upstream catalog has resolved the
//! hdf5 requirement, because it needs the dependency's *own* option set.
//! Both stages are read-only; a failure aborts the whole build invocation
//! before any external tool is touched.

use miette::Diagnostic;
use thiserror::Error;

use crate::core::options::OptionSet;
use crate::core::requirement::Requirement;
use crate::registry::Catalog;
use crate::resolver::requirements::resolve_dependencies;

/// An invalid option combination.
///
/// Configuration errors are deterministic functions of user input: there is
/// no retry, the build aborts, and the message names the conflicting
/// options so the user can fix their selection.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("netcdf4 requires hdf5")]
    #[diagnostic(
        code(slipway::config::netcdf4_without_hdf5),
        help("enable the `hdf5` option, or disable `netcdf4`")
    )]
    Netcdf4RequiresHdf5,

    #[error("netcdf4 is required for hdf4 features")]
    #[diagnostic(
        code(slipway::config::hdf4_without_netcdf4),
        help("enable the `netcdf4` option, or disable `hdf4`")
    )]
    Hdf4RequiresNetcdf4,

    #[error("netcdf4 is required for parallel IO")]
    #[diagnostic(
        code(slipway::config::parallel_without_netcdf4),
        help("enable the `netcdf4` and `hdf5` options, or disable `parallel`")
    )]
    ParallelRequiresNetcdf4,

    #[error("hdf5 must be built with its `zlib` and `hl` options enabled (resolved {reference} has zlib={zlib}, hl={hl})")]
    #[diagnostic(code(slipway::config::hdf5_misconfigured))]
    Hdf5Misconfigured {
        reference: String,
        zlib: bool,
        hl: bool,
    },

    #[error("parallel IO requires an hdf5 build with its `parallel` option, which no supported hdf5 package provides")]
    #[diagnostic(
        code(slipway::config::parallel_unavailable),
        help("disable the `parallel` option; no parallel-capable hdf5 exists in the supported catalog")
    )]
    ParallelUnavailable,

    #[error("no supported package satisfies requirement `{reference}`")]
    #[diagnostic(code(slipway::config::unresolved_requirement))]
    UnresolvedRequirement { reference: String },
}

/// Stage 1: check cross-option invariants against the raw option values.
///
/// Checks run in a fixed order and short-circuit on the first violation.
pub fn validate(options: &OptionSet) -> Result<(), ConfigurationError> {
    if options.netcdf4 && !options.hdf5 {
        return Err(ConfigurationError::Netcdf4RequiresHdf5);
    }
    if options.hdf4 && !options.netcdf4 {
        return Err(ConfigurationError::Hdf4RequiresNetcdf4);
    }
    if options.parallel && !(options.netcdf4 && options.hdf5) {
        return Err(ConfigurationError::ParallelRequiresNetcdf4);
    }
    Ok(())
}

/// Stage 2: check cross-package invariants against the resolved hdf5 build.
///
/// Every declared requirement must exist in the catalog, and the resolved
/// hdf5 package must carry the sub-options the configuration imposes on it.
/// Parallel IO additionally needs hdf5's own `parallel` sub-option; the
/// supported catalog never provides it, so a `parallel` request always
/// fails here. That is deliberate: the upstream ecosystem has no parallel
/// hdf5 build, and pretending otherwise would produce a broken package.
pub fn validate_resolved(
    options: &OptionSet,
    catalog: &dyn Catalog,
) -> Result<(), ConfigurationError> {
    for requirement in resolve_dependencies(options) {
        let resolved = catalog.resolve(&requirement).ok_or_else(|| {
            ConfigurationError::UnresolvedRequirement {
                reference: requirement.reference(),
            }
        })?;

        if requirement.name() == "hdf5" {
            check_hdf5(&requirement, &resolved)?;
        }
    }
    Ok(())
}

fn check_hdf5(
    requirement: &Requirement,
    resolved: &crate::registry::ResolvedDependency,
) -> Result<(), ConfigurationError> {
    let zlib = resolved.has_feature("zlib");
    let hl = resolved.has_feature("hl");
    if !(zlib && hl) {
        return Err(ConfigurationError::Hdf5Misconfigured {
            reference: requirement.reference(),
            zlib,
            hl,
        });
    }

    if requirement.requires_feature("parallel") && !resolved.has_feature("parallel") {
        return Err(ConfigurationError::ParallelUnavailable);
    }

    Ok(())
}
