//! Target platform description.
//!
//! A `Platform` is an immutable snapshot of the settings a resolution pass
//! runs against: operating system family, compiler family, and (for MSVC)
//! the compiler runtime linkage.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Operating system family of the build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Os {
    Linux,
    Macos,
    Windows,
    FreeBsd,
}

impl Os {
    /// Whether this OS belongs to the Windows family.
    pub fn is_windows_family(self) -> bool {
        matches!(self, Os::Windows)
    }

    /// Whether this OS belongs to the Linux family.
    pub fn is_linux(self) -> bool {
        matches!(self, Os::Linux)
    }

    /// Get the OS name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Macos => "macos",
            Os::Windows => "windows",
            Os::FreeBsd => "freebsd",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiler family used to build the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Compiler {
    Gcc,
    Clang,
    AppleClang,
    Msvc,
}

impl Compiler {
    /// Whether this is the Visual Studio compiler family.
    pub fn is_msvc(self) -> bool {
        matches!(self, Compiler::Msvc)
    }

    /// Get the compiler name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
            Compiler::AppleClang => "apple-clang",
            Compiler::Msvc => "msvc",
        }
    }
}

impl std::fmt::Display for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiler runtime linkage mode (meaningful for MSVC only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CrtLinkage {
    /// Statically linked runtime (/MT, /MTd)
    Static,
    /// Dynamically linked runtime (/MD, /MDd)
    Dynamic,
}

/// Immutable target platform context for one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub os: Os,
    pub compiler: Compiler,

    /// Runtime linkage; `None` outside the MSVC family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<CrtLinkage>,
}

impl Platform {
    /// Create a platform context.
    pub fn new(os: Os, compiler: Compiler) -> Self {
        Platform {
            os,
            compiler,
            runtime: None,
        }
    }

    /// Set the compiler runtime linkage.
    pub fn with_runtime(mut self, runtime: CrtLinkage) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Derive a platform context from the host.
    ///
    /// The compiler is the conventional default for the OS; use CLI or
    /// profile overrides for anything else.
    pub fn host() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::new(Os::Windows, Compiler::Msvc).with_runtime(CrtLinkage::Dynamic)
        }
        #[cfg(target_os = "macos")]
        {
            Platform::new(Os::Macos, Compiler::AppleClang)
        }
        #[cfg(target_os = "freebsd")]
        {
            Platform::new(Os::FreeBsd, Compiler::Clang)
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "freebsd")))]
        {
            Platform::new(Os::Linux, Compiler::Gcc)
        }
    }

    /// Whether the MSVC runtime is statically linked.
    ///
    /// Defaults to dynamic when no runtime is recorded.
    pub fn has_static_runtime(&self) -> bool {
        self.runtime == Some(CrtLinkage::Static)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.compiler)?;
        if let Some(runtime) = self.runtime {
            let rt = match runtime {
                CrtLinkage::Static => "static-crt",
                CrtLinkage::Dynamic => "dynamic-crt",
            };
            write!(f, " ({})", rt)?;
        }
        Ok(())
    }
}
