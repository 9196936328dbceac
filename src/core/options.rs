//! Feature options for a recipe build.
//!
//! An `OptionSet` is built once per package-build invocation from profile
//! defaults and user overrides, normalized against the platform, and then
//! consumed read-only by validation, dependency resolution, and flag
//! computation.

use serde::{Deserialize, Serialize};

/// The recognized feature options and their values.
///
/// `fpic` is the only removable field: normalization deletes it on the
/// Windows family and for shared builds, so a `None` means the option does
/// not exist for this configuration rather than "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionSet {
    /// Build a shared library instead of a static one.
    pub shared: bool,

    /// Position-independent code for static non-Windows builds.
    #[serde(rename = "fPIC", skip_serializing_if = "Option::is_none")]
    pub fpic: Option<bool>,

    /// Build the bundled command-line utilities (ncdump and friends).
    pub build_utilities: bool,

    /// Enable the HDF5-backed netCDF-4 data model.
    pub netcdf4: bool,

    /// HDF4 compatibility support; meaningful only with `netcdf4`.
    pub hdf4: bool,

    /// HDF5 storage backend; required by `netcdf4`.
    pub hdf5: bool,

    /// OPeNDAP remote data access support.
    pub dap: bool,

    /// Parallel IO through HDF5; meaningful only with `netcdf4` + `hdf5`.
    pub parallel: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        OptionSet {
            shared: false,
            fpic: Some(true),
            build_utilities: false,
            netcdf4: true,
            hdf4: false,
            hdf5: true,
            dap: true,
            parallel: false,
        }
    }
}

/// All option names accepted by profile files and `-o NAME=VALUE` overrides.
pub const OPTION_NAMES: &[&str] = &[
    "shared",
    "fPIC",
    "build_utilities",
    "netcdf4",
    "hdf4",
    "hdf5",
    "dap",
    "parallel",
];

impl OptionSet {
    /// Set a named option.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), UnknownOptionError> {
        match name {
            "shared" => self.shared = value,
            "fPIC" => self.fpic = Some(value),
            "build_utilities" => self.build_utilities = value,
            "netcdf4" => self.netcdf4 = value,
            "hdf4" => self.hdf4 = value,
            "hdf5" => self.hdf5 = value,
            "dap" => self.dap = value,
            "parallel" => self.parallel = value,
            _ => return Err(UnknownOptionError(name.to_string())),
        }
        Ok(())
    }

    /// Parse and apply a `NAME=VALUE` override string.
    ///
    /// Values are parsed case-insensitively (`true`/`True`/`TRUE`).
    /// Assigning `fPIC` before normalization is allowed even on platforms
    /// where normalization will subsequently remove it.
    pub fn apply_override(&mut self, spec: &str) -> anyhow::Result<()> {
        let (name, value) = spec.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("invalid option override `{}`, expected NAME=VALUE", spec)
        })?;

        let value = match value.to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => true,
            "false" | "off" | "0" => false,
            other => anyhow::bail!(
                "invalid value `{}` for option `{}`, expected true or false",
                other,
                name
            ),
        };

        self.set(name.trim(), value)?;
        Ok(())
    }
}

/// Error returned for an option name outside the recognized set.
#[derive(Debug, Clone)]
pub struct UnknownOptionError(pub String);

impl std::fmt::Display for UnknownOptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown option `{}`, valid options: {}",
            self.0,
            OPTION_NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownOptionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_recipe() {
        let options = OptionSet::default();
        assert!(!options.shared);
        assert_eq!(options.fpic, Some(true));
        assert!(!options.build_utilities);
        assert!(options.netcdf4);
        assert!(!options.hdf4);
        assert!(options.hdf5);
        assert!(options.dap);
        assert!(!options.parallel);
    }

    #[test]
    fn test_apply_override() {
        let mut options = OptionSet::default();
        options.apply_override("hdf4=True").unwrap();
        options.apply_override("dap=false").unwrap();
        assert!(options.hdf4);
        assert!(!options.dap);
    }

    #[test]
    fn test_apply_override_fpic() {
        let mut options = OptionSet::default();
        options.apply_override("fPIC=false").unwrap();
        assert_eq!(options.fpic, Some(false));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut options = OptionSet::default();
        let err = options.apply_override("with_zlib=true").unwrap_err();
        assert!(err.to_string().contains("unknown option `with_zlib`"));
    }

    #[test]
    fn test_malformed_override_rejected() {
        let mut options = OptionSet::default();
        assert!(options.apply_override("shared").is_err());
        assert!(options.apply_override("shared=maybe").is_err());
    }

    #[test]
    fn test_toml_partial_table_takes_defaults() {
        let options: OptionSet = toml::from_str("shared = true\ndap = false\n").unwrap();
        assert!(options.shared);
        assert!(!options.dap);
        // untouched fields keep recipe defaults
        assert!(options.netcdf4);
        assert_eq!(options.fpic, Some(true));
    }

    #[test]
    fn test_toml_unknown_key_rejected() {
        let result: Result<OptionSet, _> = toml::from_str("byterange = true\n");
        assert!(result.is_err());
    }
}
