//! Build profiles.
//!
//! A profile is a TOML file carrying the target platform and option
//! selections for one build invocation:
//!
//! ```toml
//! [platform]
//! os = "linux"
//! compiler = "gcc"
//!
//! [options]
//! shared = true
//! dap = false
//! ```
//!
//! Both tables are optional; omitted fields fall back to the host platform
//! and the recipe's default options.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::options::OptionSet;
use crate::core::platform::Platform;

/// Platform and option selections loaded from a profile file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub platform: Option<Platform>,
    pub options: Option<OptionSet>,
}

impl Profile {
    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile `{}`", path.display()))?;
        let profile: Profile = toml::from_str(&text)
            .with_context(|| format!("failed to parse profile `{}`", path.display()))?;
        Ok(profile)
    }

    /// The profile's platform, or the host platform if unspecified.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::host)
    }

    /// The profile's options, or the recipe defaults if unspecified.
    pub fn options(&self) -> OptionSet {
        self.options.clone().unwrap_or_default()
    }
}
