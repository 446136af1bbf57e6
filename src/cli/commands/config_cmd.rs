//! config command - Show effective configuration and where it comes from

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Print the effective configuration as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let toml = ctx
        .config
        .to_effective_toml()
        .context("Failed to render configuration")?;
    if let Some(path) = ctx.config.loaded_from() {
        output::print(format!("# loaded from {}", path.display()), ctx.verbosity);
    }
    print!("{}", toml);
    Ok(())
}

/// Print the search path, marking the file in use with `*`.
pub fn path(ctx: &Context) -> Result<()> {
    let candidates = Config::candidate_paths(
        ctx.config_path.as_deref(),
        |key| std::env::var(key).ok(),
        dirs::home_dir(),
    );
    let loaded = ctx.config.loaded_from();

    let lines: Vec<String> = candidates
        .iter()
        .map(|p| {
            let marker = if Some(p.as_path()) == loaded { "* " } else { "  " };
            format!("{}{}", marker, p.display())
        })
        .collect();

    if lines.is_empty() {
        output::warn("no config locations to search", ctx.verbosity);
    } else {
        println!("{}", output::format_list(&lines, ""));
    }
    Ok(())
}
