use crate::parser::{ParserOptions, PastTimePolicy, DEFAULT_DURATION_MINUTES, DEFAULT_TIMEZONE};
use anyhow::{anyhow, bail, Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// IANA zone the utterances are read in
    pub timezone: String,
    pub default_duration_minutes: i64,
    pub past_time_policy: PastTimePolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.name().to_string(),
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            past_time_policy: PastTimePolicy::default(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, writing the
    /// defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Build parser options, checking the zone name and default duration
    pub fn parser_options(&self) -> Result<ParserOptions> {
        if self.parser.default_duration_minutes <= 0 {
            bail!(
                "default_duration_minutes must be positive, got {}",
                self.parser.default_duration_minutes
            );
        }
        Ok(ParserOptions {
            timezone: parse_timezone(&self.parser.timezone)?,
            default_duration_minutes: self.parser.default_duration_minutes,
            past_time_policy: self.parser.past_time_policy,
        })
    }
}

/// Resolve an IANA zone label such as `Asia/Seoul`
pub fn parse_timezone(label: &str) -> Result<Tz> {
    label.trim().parse::<Tz>().map_err(|_| anyhow!("Invalid timezone: {}", label))
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("com", "kocal", "kocal").context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
