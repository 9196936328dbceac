//! `slipway describe` command

use anyhow::Result;
use slipway::builder::install::collect_libs;
use slipway::resolver::describe_package;
use slipway::{resolve, SupportedCatalog};

use crate::cli::DescribeArgs;
use crate::commands::selection;

pub fn execute(args: DescribeArgs) -> Result<()> {
    let (options, platform) = selection(&args.selection)?;
    let catalog = SupportedCatalog::new();

    let resolution = resolve(options, platform, &catalog)?;

    // read-only: collect from an installed tree when given, otherwise
    // assume the conventional library name
    let libs = match &args.prefix {
        Some(prefix) => collect_libs(prefix),
        None => vec!["netcdf".to_string()],
    };

    let descriptor = describe_package(&resolution.options, &resolution.platform, libs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("{}", descriptor);
    }

    Ok(())
}
