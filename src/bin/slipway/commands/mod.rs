//! Command implementations.

pub mod completions;
pub mod configure;
pub mod deps;
pub mod describe;
pub mod flags;
pub mod validate;

use anyhow::Result;
use slipway::{OptionSet, Platform, Profile};

use crate::cli::SelectionArgs;

/// Build the raw option set and platform from a profile file plus CLI
/// overrides. Overrides win over the profile, which wins over defaults.
pub fn selection(args: &SelectionArgs) -> Result<(OptionSet, Platform)> {
    let profile = match &args.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    let mut platform = profile.platform();
    if let Some(os) = args.os {
        platform.os = os;
    }
    if let Some(compiler) = args.compiler {
        platform.compiler = compiler;
    }
    if let Some(runtime) = args.runtime {
        platform.runtime = Some(runtime);
    }

    let mut options = profile.options();
    for spec in &args.options {
        options.apply_override(spec)?;
    }

    Ok((options, platform))
}
