//! `slipway flags` command

use anyhow::Result;
use slipway::{resolve, SupportedCatalog};

use crate::cli::FlagsArgs;
use crate::commands::selection;

pub fn execute(args: FlagsArgs) -> Result<()> {
    let (options, platform) = selection(&args.selection)?;
    let catalog = SupportedCatalog::new();

    let resolution = resolve(options, platform, &catalog)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution.flags)?);
    } else {
        for (name, value) in resolution.flags.iter() {
            println!("{} = {}", name, value);
        }
    }

    Ok(())
}
