//! `slipway deps` command

use anyhow::Result;
use slipway::{resolve, SupportedCatalog};

use crate::cli::DepsArgs;
use crate::commands::selection;

pub fn execute(args: DepsArgs) -> Result<()> {
    let (options, platform) = selection(&args.selection)?;
    let catalog = SupportedCatalog::new();

    let resolution = resolve(options, platform, &catalog)?;
    let requirements: Vec<_> = resolution.requirements.iter().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&requirements)?);
    } else {
        for requirement in requirements {
            println!("{}", requirement);
        }
    }

    Ok(())
}
