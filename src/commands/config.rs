use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{base_url_for_context, codespace_name, config_path};
use crate::error::OctofitResult;
use crate::logging::get_log_file_path;

pub fn handle_config(context: &mut CliContext, matches: &ArgMatches) -> OctofitResult<()> {
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("set-base-url") {
        context.set_base_url(Some(url.clone()))?;
        println!("{} Base URL saved: {}", "✓".green(), url);
        changed = true;
    } else if matches.get_flag("clear-base-url") {
        context.set_base_url(None)?;
        println!("{} Saved base URL cleared", "✓".green());
        changed = true;
    }

    if let Some(format) = matches.get_one::<String>("default-format") {
        context.set_default_format(format.clone())?;
        println!("{} Default format saved: {}", "✓".green(), format);
        changed = true;
    }

    if matches.get_flag("show") || !changed {
        let config = context.config();
        println!("{}: {}", "Config file".bold(), config_path().display());
        println!("{}: {}", "Effective base URL".bold(), context.base_url().bright_blue());
        println!(
            "{}: {}",
            "Saved base URL".bold(),
            config.base_url.as_deref().unwrap_or("(none)")
        );
        println!(
            "{}: {}",
            "Default format".bold(),
            config.output_format().unwrap_or("(none)")
        );
        let context_name = codespace_name();
        println!(
            "{}: {} -> {}",
            "Execution context".bold(),
            context_name.as_deref().unwrap_or("(none)"),
            base_url_for_context(context_name.as_deref()).dimmed()
        );
        if let Some(log_file) = get_log_file_path() {
            println!("{}: {}", "Log file".bold(), log_file.display());
        }
    }

    Ok(())
}
