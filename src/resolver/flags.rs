//! CMake cache flag computation.
//!
//! The flag set handed to the external configure step has three layers:
//! the fixed policy defaults (engineering choices baked into the recipe,
//! never user-configurable), the option-driven flags, and the
//! platform-conditional flags. The policy table lives in one place so the
//! whole fixed contract is visible and testable at once.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::options::OptionSet;
use crate::core::platform::Platform;

/// A single flag value handed to the build-configuration step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(true) => write!(f, "ON"),
            FlagValue::Bool(false) => write!(f, "OFF"),
            FlagValue::Int(i) => write!(f, "{}", i),
            FlagValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// The flat set of flags consumed by the external configure step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BuildFlagSet {
    flags: BTreeMap<String, FlagValue>,
}

impl BuildFlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FlagValue>) {
        self.flags.insert(name.into(), value.into());
    }

    /// Get a flag value.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Get a boolean flag value.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.flags.get(name) {
            Some(FlagValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Whether a flag is present at all.
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Iterate over flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.flags.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Fixed policy defaults, applied to every build.
///
/// These are recipe policy, not user choices: the legacy v2 API and mmap
/// stay on, RPC and every on-disk test suite stay off. The table is the
/// contract; nothing outside it may silently flip one of these.
pub const POLICY_DEFAULTS: &[(&str, bool)] = &[
    ("ENABLE_V2_API", true),
    ("ENABLE_MMAP", true),
    ("ENABLE_EXAMPLES", false),
    ("ENABLE_LOGGING", false),
    ("ENABLE_SET_LOG_LEVEL_FUNC", true),
    ("ENABLE_STRICT_NULL_BYTE_HEADER_PADDING", false),
    ("ENABLE_RPC", false),
    ("ENABLE_BYTERANGE", false),
    ("ENABLE_DAP_LONG_TESTS", false),
    ("ENABLE_DAP_REMOTE_TESTS", false),
    ("ENABLE_EXTRA_TESTS", false),
    ("ENABLE_TESTS", false),
    ("ENABLE_EXTREME_NUMBERS", false),
    ("ENABLE_METADATA_PERF_TESTS", false),
    ("ENABLE_FSYNC", false),
    ("ENABLE_JNA", false),
    ("ENABLE_LARGE_FILE_SUPPORT", true),
    ("ENABLE_EXAMPLE_TESTS", false),
    ("ENABLE_PNETCDF", false),
    ("ENABLE_ERANGE_FILL", false),
    ("ENABLE_PARALLEL_TESTS", false),
    ("ENABLE_FILTER_TESTING", false),
    ("ENABLE_CLIENTSIDE_FILTERS", false),
    ("ENABLE_DOXYGEN", false),
    ("ENABLE_DISKLESS", true),
    ("ENABLE_CDF5", true),
    ("ENABLE_BASH_SCRIPT_TESTING", false),
];

/// Stack size override for MSVC builds, in bytes.
const MSVC_STACK_SIZE: i64 = 40_000_000;

/// Compute the flag set for a normalized option set on a platform.
pub fn compile_flags(options: &OptionSet, platform: &Platform) -> BuildFlagSet {
    let mut flags = BuildFlagSet::new();

    for (name, value) in POLICY_DEFAULTS {
        flags.set(*name, *value);
    }

    flags.set("BUILD_UTILITIES", options.build_utilities);
    flags.set("ENABLE_NETCDF_4", options.netcdf4);
    flags.set("ENABLE_HDF4", options.hdf4);
    if options.hdf4 {
        flags.set("ENABLE_HDF4_FILE_TESTS", false);
    }
    flags.set("USE_HDF5", options.hdf5);
    if options.hdf5 {
        flags.set("NC_ENABLE_HDF_16_API", true);
    }
    flags.set("ENABLE_DAP", options.dap);
    flags.set("ENABLE_PARALLEL4", options.parallel);

    if platform.compiler.is_msvc() {
        flags.set("ENABLE_XGETOPT", true);
        flags.set("NC_MSVC_STACK_SIZE", MSVC_STACK_SIZE);
        flags.set("NC_USE_STATIC_CRT", platform.has_static_runtime());
    }

    if !platform.os.is_windows_family() {
        flags.set("ENABLE_STDIO", false);
        flags.set("ENABLE_FFIO", false);
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::{Compiler, CrtLinkage, Os};

    fn linux() -> Platform {
        Platform::new(Os::Linux, Compiler::Gcc)
    }

    fn windows_msvc() -> Platform {
        Platform::new(Os::Windows, Compiler::Msvc)
    }

    #[test]
    fn test_policy_defaults_are_always_present() {
        let flags = compile_flags(&OptionSet::default(), &linux());
        for (name, value) in POLICY_DEFAULTS {
            assert_eq!(flags.get_bool(name), Some(*value), "flag {}", name);
        }
    }

    #[test]
    fn test_option_driven_flags() {
        let options = OptionSet {
            hdf4: true,
            build_utilities: true,
            ..Default::default()
        };
        let flags = compile_flags(&options, &linux());

        assert_eq!(flags.get_bool("BUILD_UTILITIES"), Some(true));
        assert_eq!(flags.get_bool("ENABLE_NETCDF_4"), Some(true));
        assert_eq!(flags.get_bool("ENABLE_HDF4"), Some(true));
        assert_eq!(flags.get_bool("ENABLE_HDF4_FILE_TESTS"), Some(false));
        assert_eq!(flags.get_bool("USE_HDF5"), Some(true));
        assert_eq!(flags.get_bool("NC_ENABLE_HDF_16_API"), Some(true));
        assert_eq!(flags.get_bool("ENABLE_DAP"), Some(true));
        assert_eq!(flags.get_bool("ENABLE_PARALLEL4"), Some(false));
    }

    #[test]
    fn test_conditional_flags_absent_when_off() {
        let options = OptionSet {
            netcdf4: false,
            hdf5: false,
            hdf4: false,
            ..Default::default()
        };
        let flags = compile_flags(&options, &linux());
        assert!(!flags.contains("ENABLE_HDF4_FILE_TESTS"));
        assert!(!flags.contains("NC_ENABLE_HDF_16_API"));
    }

    #[test]
    fn test_non_windows_disables_stdio_and_ffio() {
        let flags = compile_flags(&OptionSet::default(), &linux());
        assert_eq!(flags.get_bool("ENABLE_STDIO"), Some(false));
        assert_eq!(flags.get_bool("ENABLE_FFIO"), Some(false));
    }

    #[test]
    fn test_windows_has_no_stdio_toggles() {
        let flags = compile_flags(&OptionSet::default(), &windows_msvc());
        assert!(!flags.contains("ENABLE_STDIO"));
        assert!(!flags.contains("ENABLE_FFIO"));
    }

    #[test]
    fn test_msvc_only_flags() {
        let flags = compile_flags(&OptionSet::default(), &windows_msvc());
        assert_eq!(flags.get_bool("ENABLE_XGETOPT"), Some(true));
        assert_eq!(
            flags.get("NC_MSVC_STACK_SIZE"),
            Some(&FlagValue::Int(40_000_000))
        );
        assert_eq!(flags.get_bool("NC_USE_STATIC_CRT"), Some(false));

        let static_crt = windows_msvc().with_runtime(CrtLinkage::Static);
        let flags = compile_flags(&OptionSet::default(), &static_crt);
        assert_eq!(flags.get_bool("NC_USE_STATIC_CRT"), Some(true));
    }

    #[test]
    fn test_msvc_flags_absent_elsewhere() {
        for platform in [linux(), Platform::new(Os::Macos, Compiler::AppleClang)] {
            let flags = compile_flags(&OptionSet::default(), &platform);
            assert!(!flags.contains("ENABLE_XGETOPT"));
            assert!(!flags.contains("NC_MSVC_STACK_SIZE"));
            assert!(!flags.contains("NC_USE_STATIC_CRT"));
        }
    }

    #[test]
    fn test_flag_rendering() {
        assert_eq!(FlagValue::Bool(true).to_string(), "ON");
        assert_eq!(FlagValue::Bool(false).to_string(), "OFF");
        assert_eq!(FlagValue::Int(40_000_000).to_string(), "40000000");
        assert_eq!(FlagValue::from("Release").to_string(), "Release");
    }
}
