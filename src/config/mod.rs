use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::menu::Menu;

/// Menu described in a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default = "default_exit_entry")]
    pub exit_entry: bool,
    #[serde(default)]
    pub centred_title: bool,
    #[serde(default)]
    pub vertical_frame: bool,
}

fn default_exit_entry() -> bool {
    true
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Menu".to_string(),
            entries: Vec::new(),
            exit_entry: default_exit_entry(),
            centred_title: false,
            vertical_frame: false,
        }
    }
}

impl MenuConfig {
    /// `<config dir>/kibo/menu.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("kibo")
            .join("menu.toml")
    }

    /// Load from `path`, falling back to the default menu if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No menu file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid menu file: {}", path.display()))
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse menu description")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize menu description")
    }

    pub fn into_menu(self) -> Result<Menu> {
        let mut menu = Menu::new(self.title, self.entries, self.exit_entry, self.centred_title)?;
        menu.set_use_vertical_frame(self.vertical_frame);
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_keys_take_defaults() -> Result<()> {
        let config = MenuConfig::from_str(
            r#"
title = "Main"
entries = ["Play", "Quit"]
"#,
        )?;

        assert_eq!(config.title, "Main");
        assert!(config.exit_entry);
        assert!(!config.centred_title);
        assert!(!config.vertical_frame);
        Ok(())
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(MenuConfig::from_str("entries = [\"a\"]").is_err());
    }

    #[test]
    fn load_from_file_and_build_menu() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.toml");
        std::fs::write(
            &path,
            r#"
title = "Settings"
entries = ["Audio", "Video"]
exit_entry = false
centred_title = true
vertical_frame = true
"#,
        )?;

        let menu = MenuConfig::load(&path)?.into_menu()?;
        assert_eq!(menu.title(), "Settings");
        assert_eq!(menu.entries().len(), 2);
        assert!(!menu.uses_exit_entry());
        assert!(menu.centred_title());
        assert!(menu.use_vertical_frame());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = MenuConfig::load(&dir.path().join("absent.toml"))?;
        assert_eq!(config, MenuConfig::default());
        Ok(())
    }

    #[test]
    fn unselectable_menu_fails_to_build() {
        let config = MenuConfig {
            exit_entry: false,
            ..MenuConfig::default()
        };
        assert!(config.into_menu().is_err());
    }

    #[test]
    fn toml_round_trip() -> Result<()> {
        let config = MenuConfig {
            title: "Main".to_string(),
            entries: vec!["Play".to_string()],
            ..MenuConfig::default()
        };
        assert_eq!(MenuConfig::from_str(&config.to_toml()?)?, config);
        Ok(())
    }
}
