// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;
use vcfkit_vcard::JoinStyle;

/// Name of the configuration directory.
pub const APP_NAME: &str = "vcfkit";

const VCF_CONFIG_ENV: &str = "VCF_CONFIG";
const DEFAULT_CARDS_DIR: &str = "cards";

/// Load the configuration.
///
/// Lookup order: `path`, then `$VCF_CONFIG`, then
/// `$XDG_CONFIG_HOME/vcfkit/config.toml`. A missing default file gives the
/// default configuration, a missing explicit file is an error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(VCF_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .try_into()
}

/// Configuration for the vcf command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for card files
    pub cards_dir: PathBuf,

    /// How values are joined when writing cards
    pub join_style: JoinStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards_dir: PathBuf::from(DEFAULT_CARDS_DIR),
            join_style: JoinStyle::default(),
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    cards_dir: Option<String>,
    join_style: Option<String>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<ConfigRaw> for Config {
    type Error = Box<dyn Error>;

    fn try_from(raw: ConfigRaw) -> Result<Self, Self::Error> {
        let cards_dir = raw
            .cards_dir
            .map_or_else(|| PathBuf::from(DEFAULT_CARDS_DIR), |a| expand_path(&a));

        let join_style = match raw.join_style {
            Some(style) => style.parse().map_err(|_| {
                format!("Invalid join_style `{style}`, expected `compatible` or `round-trip`")
            })?,
            None => JoinStyle::default(),
        };

        Ok(Self {
            cards_dir,
            join_style,
        })
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }

        tracing::warn!("Home directory not found");
    }

    path.into()
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, cards_dir: &str) -> PathBuf {
        let path = dir.path().join(name);
        let content = format!(
            r#"
cards_dir = "{cards_dir}"
join_style = "round-trip"
"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_config_content() {
        let raw: ConfigRaw = "cards_dir = \"/tmp/cards\"\njoin_style = \"compatible\"\n"
            .parse()
            .unwrap();
        let config = Config::try_from(raw).unwrap();
        assert_eq!(config.cards_dir, PathBuf::from("/tmp/cards"));
        assert_eq!(config.join_style, JoinStyle::Compatible);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let raw: ConfigRaw = "".parse().unwrap();
        assert_eq!(Config::try_from(raw).unwrap(), Config::default());
    }

    #[test]
    fn rejects_unknown_join_style() {
        let raw: ConfigRaw = "join_style = \"semicolon\"\n".parse().unwrap();
        let err = Config::try_from(raw).unwrap_err();
        assert!(err.to_string().contains("semicolon"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!("cards_dir = ".parse::<ConfigRaw>().is_err());
    }

    #[test]
    fn expands_home_directory() {
        let expanded = expand_path("~/Contacts");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Contacts"));
        }
        assert_eq!(expand_path("/abs/cards"), PathBuf::from("/abs/cards"));
        assert_eq!(expand_path("cards"), PathBuf::from("cards"));
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, "config.toml", "/flag/cards");
        let env_path = write_config(&temp_dir, "env_config.toml", "/env/cards");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(VCF_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.cards_dir, PathBuf::from("/flag/cards"));
        assert_eq!(config.join_style, JoinStyle::RoundTrip);

        unsafe {
            std::env::remove_var(VCF_CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env_config.toml", "/env/cards");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(VCF_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.cards_dir, PathBuf::from("/env/cards"));

        unsafe {
            std::env::remove_var(VCF_CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn missing_default_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        let old_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::remove_var(VCF_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config, Config::default());

        unsafe {
            match old_xdg {
                Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[tokio::test]
    async fn missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let err = parse_config(Some(path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
