//! `slipway validate` command

use anyhow::Result;
use slipway::builder::{PACKAGE_NAME, UPSTREAM_VERSION};
use slipway::{resolve, SupportedCatalog};

use crate::cli::SelectionArgs;
use crate::commands::selection;

pub fn execute(args: SelectionArgs) -> Result<()> {
    let (options, platform) = selection(&args)?;
    let catalog = SupportedCatalog::new();

    let resolution = resolve(options, platform, &catalog)?;

    println!(
        "{}/{}: configuration OK for {}",
        PACKAGE_NAME, UPSTREAM_VERSION, resolution.platform
    );
    if resolution.requirements.is_empty() {
        println!("no external requirements");
    } else {
        println!("requires:");
        for requirement in &resolution.requirements {
            println!("  {}", requirement);
        }
    }

    Ok(())
}
