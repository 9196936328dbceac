//! CMake configure invocation.
//!
//! Renders a resolved configuration into a `cmake` argument vector and
//! runs the configure step. The argument order is stable: layout first,
//! then linkage, then the flag set in name order.

use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::builder::BuildContext;
use crate::resolver::Resolution;

/// Build the CMake configure arguments for a resolved configuration.
pub fn configure_args(resolution: &Resolution, ctx: &BuildContext) -> Vec<String> {
    let mut args = Vec::new();

    args.push("-S".to_string());
    args.push(ctx.source_dir.display().to_string());
    args.push("-B".to_string());
    args.push(ctx.build_dir.display().to_string());

    if let Some(ref generator) = ctx.generator {
        args.push("-G".to_string());
        args.push(generator.clone());
    }

    let build_type = if ctx.release { "Release" } else { "Debug" };
    args.push(format!("-DCMAKE_BUILD_TYPE={}", build_type));
    args.push(format!(
        "-DCMAKE_INSTALL_PREFIX={}",
        ctx.install_prefix.display()
    ));

    // linkage comes from the options, not the flag set
    let options = &resolution.options;
    args.push(format!(
        "-DBUILD_SHARED_LIBS={}",
        if options.shared { "ON" } else { "OFF" }
    ));
    if let Some(fpic) = options.fpic {
        args.push(format!(
            "-DCMAKE_POSITION_INDEPENDENT_CODE={}",
            if fpic { "ON" } else { "OFF" }
        ));
    }

    for (name, value) in resolution.flags.iter() {
        args.push(format!("-D{}={}", name, value));
    }

    args
}

/// Run `cmake` with the configure arguments.
pub fn configure(resolution: &Resolution, ctx: &BuildContext) -> Result<()> {
    let cmake = which::which("cmake")
        .with_context(|| format!("cmake not found in PATH\n{}", install_hint()))?;

    let args = configure_args(resolution, ctx);
    tracing::debug!("cmake configure: cmake {}", args.join(" "));

    let status = Command::new(cmake)
        .args(&args)
        .status()
        .context("failed to run cmake configure")?;

    if !status.success() {
        bail!("cmake configure failed with exit code: {:?}", status.code());
    }

    Ok(())
}

/// Platform-specific CMake install hint.
fn install_hint() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "help: install CMake with apt install cmake, dnf install cmake, or https://cmake.org/download/"
    }
    #[cfg(target_os = "macos")]
    {
        "help: install CMake with brew install cmake or https://cmake.org/download/"
    }
    #[cfg(target_os = "windows")]
    {
        "help: install CMake with winget install cmake or https://cmake.org/download/"
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        "help: install CMake from https://cmake.org/download/"
    }
}
