//! The option resolver: normalize, validate, resolve, compile.
//!
//! One synchronous, single-pass evaluation per build invocation, in strict
//! stage order: normalize → validate (stage 1) → resolve requirements →
//! validate against the resolved catalog (stage 2) → compile flags. A
//! failure at any stage aborts the invocation before any external build
//! tool runs.

pub mod describe;
pub mod flags;
pub mod normalize;
pub mod requirements;
pub mod validate;

use std::collections::BTreeSet;

use crate::core::options::OptionSet;
use crate::core::platform::Platform;
use crate::core::requirement::Requirement;
use crate::registry::Catalog;

pub use describe::describe_package;
pub use flags::{compile_flags, BuildFlagSet, FlagValue, POLICY_DEFAULTS};
pub use normalize::normalize;
pub use requirements::resolve_dependencies;
pub use validate::{validate, validate_resolved, ConfigurationError};

/// The outcome of a successful resolution pass.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Options after platform normalization.
    pub options: OptionSet,

    /// The platform the pass ran against.
    pub platform: Platform,

    /// External requirements implied by the options.
    pub requirements: BTreeSet<Requirement>,

    /// Flags for the external configure step.
    pub flags: BuildFlagSet,
}

/// Run the full resolution pipeline for one build invocation.
pub fn resolve(
    options: OptionSet,
    platform: Platform,
    catalog: &dyn Catalog,
) -> Result<Resolution, ConfigurationError> {
    let options = normalize(options, &platform);
    validate(&options)?;

    let requirements = resolve_dependencies(&options);
    validate_resolved(&options, catalog)?;

    let flags = compile_flags(&options, &platform);
    tracing::debug!(
        "resolved {} requirements, {} flags for {}",
        requirements.len(),
        flags.len(),
        platform
    );

    Ok(Resolution {
        options,
        platform,
        requirements,
        flags,
    })
}
