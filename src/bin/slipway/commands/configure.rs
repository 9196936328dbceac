//! `slipway configure` command

use anyhow::Result;
use slipway::{BuildContext, OptionSet, Platform, Recipe, SupportedCatalog};

use crate::cli::ConfigureArgs;
use crate::commands::selection;

pub fn execute(args: ConfigureArgs) -> Result<()> {
    let (options, platform): (OptionSet, Platform) = selection(&args.selection)?;
    let catalog = SupportedCatalog::new();

    let recipe = Recipe::resolve(options, platform, &catalog)?;

    let mut ctx = BuildContext::new(&args.source_dir, &args.build_dir, &args.prefix)
        .with_release(args.release);
    if let Some(generator) = args.generator {
        ctx = ctx.with_generator(generator);
    }

    if args.dry_run {
        println!("cmake {}", recipe.configure_args(&ctx).join(" "));
        return Ok(());
    }

    recipe.configure(&ctx)
}
