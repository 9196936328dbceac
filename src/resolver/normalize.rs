//! Option normalization.

use crate::core::options::OptionSet;
use crate::core::platform::Platform;

/// Prune options that do not apply on the target platform.
///
/// `fPIC` has no meaning on the Windows family and is implied for shared
/// builds everywhere, so in both cases the option is removed from the set
/// entirely. Normalization never fails and never checks cross-option
/// logic; that is the validator's job.
pub fn normalize(mut options: OptionSet, platform: &Platform) -> OptionSet {
    if platform.os.is_windows_family() || options.shared {
        options.fpic = None;
    }
    options
}
