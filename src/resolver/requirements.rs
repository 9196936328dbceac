//! Option-driven dependency requirements.

use std::collections::BTreeSet;

use semver::Version;

use crate::core::options::OptionSet;
use crate::core::requirement::Requirement;

/// Compute the external requirements implied by an option set.
///
/// The mapping is a pure function of the options: requirements are
/// declared once at configuration time and recomputed at build time, and
/// the two passes must agree, so nothing here may consult ambient state.
pub fn resolve_dependencies(options: &OptionSet) -> BTreeSet<Requirement> {
    let mut requirements = BTreeSet::new();

    if options.hdf4 {
        requirements.insert(Requirement::new("hdf4", Version::new(4, 2, 15)));
    }

    if options.hdf5 {
        let mut hdf5 = Requirement::new("hdf5", Version::new(1, 12, 0))
            .with_feature("zlib")
            .with_feature("hl");
        if options.parallel {
            hdf5 = hdf5.with_feature("parallel");
        }
        requirements.insert(hdf5);
    }

    if options.dap {
        requirements.insert(Requirement::new("libcurl", Version::new(7, 70, 0)));
    }

    if options.parallel {
        requirements.insert(Requirement::new("openmpi", Version::new(4, 1, 0)));
    }

    requirements
}
