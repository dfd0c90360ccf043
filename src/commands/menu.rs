//! Interactive menu command

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use kibo::config::MenuConfig;

pub struct MenuArgs {
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub entries: Vec<String>,
    pub no_exit: bool,
    pub centred: bool,
    pub vertical: bool,
}

pub fn run(args: MenuArgs) -> Result<()> {
    let path = args.config.unwrap_or_else(MenuConfig::default_path);
    let mut config = MenuConfig::load(&path)?;

    if let Some(title) = args.title {
        config.title = title;
    }
    if !args.entries.is_empty() {
        config.entries = args.entries;
    }
    config.exit_entry &= !args.no_exit;
    config.centred_title |= args.centred;
    config.vertical_frame |= args.vertical;

    let menu = config.into_menu()?;

    loop {
        let choice = menu.choose().context("Failed to read menu choice")?;

        if choice == 0 && menu.uses_exit_entry() {
            println!("{}", "Bye".dimmed());
            return Ok(());
        }

        let label = &menu.entries()[(choice - 1) as usize];
        println!("{} {}. {}", "::".bright_blue(), choice, label.bright_white());

        if !menu.uses_exit_entry() {
            return Ok(());
        }
    }
}
