use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use contracts::shared::list_query::PAGE_SIZE_OPTIONS;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    pub list: ListConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// Путь к JSON-фикстуре; если не задан, используется встроенная
    pub fixture_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub default_page_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BillingConfig {
    /// Ставка НДС (TVA), например 0.19
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]

[list]
default_page_size = 5

[billing]
vat_rate = 0.19
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.list.default_page_size) {
            anyhow::bail!(
                "list.default_page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS,
                self.list.default_page_size
            );
        }
        if self.billing.vat_rate < Decimal::ZERO {
            anyhow::bail!("billing.vat_rate must not be negative");
        }
        Ok(())
    }
}

/// Get the fixture file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_fixture_path(config: &Config) -> Option<PathBuf> {
    let path_str = config.data.fixture_path.as_deref()?;
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(path_str))
}
