//! Package descriptor computation.

use crate::core::descriptor::PackageDescriptor;
use crate::core::options::OptionSet;
use crate::core::platform::Platform;
use crate::resolver::requirements::resolve_dependencies;

/// Build the consumer-facing descriptor for a finished package.
///
/// `libs` is whatever the install step actually produced; when the build
/// has not run, callers pass the conventional library name.
pub fn describe_package(
    options: &OptionSet,
    platform: &Platform,
    libs: Vec<String>,
) -> PackageDescriptor {
    let mut descriptor = PackageDescriptor::new("netcdf");
    descriptor.cmake_name = "netCDF".to_string();
    descriptor.pkg_config_name = "netcdf".to_string();
    descriptor.libs = libs;

    descriptor.requires = resolve_dependencies(options)
        .iter()
        .map(|requirement| requirement.component_ref())
        .collect();

    if platform.os.is_linux() {
        descriptor.system_libs.push("m".to_string());
    }

    if options.shared && platform.os.is_windows_family() {
        descriptor.defines.push("DLL_NETCDF".to_string());
    }

    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::{Compiler, Os};

    fn libs() -> Vec<String> {
        vec!["netcdf".to_string()]
    }

    #[test]
    fn test_component_names() {
        let platform = Platform::new(Os::Linux, Compiler::Gcc);
        let descriptor = describe_package(&OptionSet::default(), &platform, libs());
        assert_eq!(descriptor.component, "netcdf");
        assert_eq!(descriptor.cmake_name, "netCDF");
        assert_eq!(descriptor.pkg_config_name, "netcdf");
    }

    #[test]
    fn test_requires_mirror_dependency_set() {
        let platform = Platform::new(Os::Linux, Compiler::Gcc);
        let options = OptionSet {
            hdf4: true,
            ..Default::default()
        };
        let descriptor = describe_package(&options, &platform, libs());
        assert_eq!(
            descriptor.requires,
            vec!["hdf4::hdf4", "hdf5::hdf5", "libcurl::libcurl"]
        );
    }

    #[test]
    fn test_linux_links_libm() {
        let platform = Platform::new(Os::Linux, Compiler::Gcc);
        let descriptor = describe_package(&OptionSet::default(), &platform, libs());
        assert_eq!(descriptor.system_libs, vec!["m"]);

        let platform = Platform::new(Os::Macos, Compiler::AppleClang);
        let descriptor = describe_package(&OptionSet::default(), &platform, libs());
        assert!(descriptor.system_libs.is_empty());
    }

    #[test]
    fn test_dll_define_only_for_windows_shared() {
        let options = OptionSet {
            shared: true,
            ..Default::default()
        };

        let windows = Platform::new(Os::Windows, Compiler::Msvc);
        let descriptor = describe_package(&options, &windows, libs());
        assert_eq!(descriptor.defines, vec!["DLL_NETCDF"]);

        // shared on Linux: no define
        let linux = Platform::new(Os::Linux, Compiler::Gcc);
        let descriptor = describe_package(&options, &linux, libs());
        assert!(descriptor.defines.is_empty());

        // static on Windows: no define
        let descriptor = describe_package(&OptionSet::default(), &windows, libs());
        assert!(descriptor.defines.is_empty());
    }
}
