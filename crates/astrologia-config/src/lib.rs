use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Searched in order when no explicit path is given.
pub const CONFIG_PATHS: [&str; 2] = ["configs/astrologia.toml", "../../configs/astrologia.toml"];

/// Accepted bounds for an evaluation year, from the config file or the command line.
pub const MIN_EVALUATION_YEAR: i32 = 1;
pub const MAX_EVALUATION_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AstrologiaSettings {
    pub format: OutputFormat,
    /// Year used for personal-year numbers; `None` means the current year.
    pub evaluation_year: Option<i32>,
    /// Report modern (outer planet) rulers instead of traditional ones.
    pub modern_rulers: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct AstrologiaToml {
    #[serde(default)]
    format: OutputFormat,
    #[serde(default)]
    evaluation_year: Option<i32>,
    #[serde(default)]
    modern_rulers: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    astrologia: Option<AstrologiaToml>,
}

/// First readable file from [`CONFIG_PATHS`], if any.
pub fn read_config_toml_text() -> Option<(String, &'static str)> {
    CONFIG_PATHS
        .iter()
        .find_map(|p| fs::read_to_string(p).ok().map(|text| (text, *p)))
}

pub fn parse_settings(text: &str) -> anyhow::Result<AstrologiaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse astrologia settings: {e}"))?;
    let Some(cfg) = root.astrologia else {
        return Ok(AstrologiaSettings::default());
    };
    let AstrologiaToml {
        format,
        evaluation_year,
        modern_rulers,
    } = cfg;
    if let Some(year) = evaluation_year {
        if !(MIN_EVALUATION_YEAR..=MAX_EVALUATION_YEAR).contains(&year) {
            anyhow::bail!(
                "astrologia.evaluation_year must be between {MIN_EVALUATION_YEAR} and \
                 {MAX_EVALUATION_YEAR}, got {year}"
            );
        }
    }
    Ok(AstrologiaSettings {
        format,
        evaluation_year,
        modern_rulers,
    })
}

/// Load from an explicit file. A missing file is an error here.
pub fn load_settings_from(path: &Path) -> anyhow::Result<AstrologiaSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Load from the first of [`CONFIG_PATHS`] that exists, or fall back to defaults.
pub fn load_settings() -> anyhow::Result<AstrologiaSettings> {
    match read_config_toml_text() {
        Some((text, path)) => {
            log::debug!("loading astrologia settings from {}", path);
            parse_settings(&text).with_context(|| format!("Invalid config file {}", path))
        }
        None => {
            log::debug!("no astrologia config found in {:?}, using defaults", CONFIG_PATHS);
            Ok(AstrologiaSettings::default())
        }
    }
}
