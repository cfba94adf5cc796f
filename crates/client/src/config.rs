//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use bridgeworld_core::{CharacterClass, Difficulty};

/// How the session report is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown report format '{other}' (expected text or json)"),
        }
    }
}

/// Configuration for one headless session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Session seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub character_name: String,
    pub class: CharacterClass,
    pub difficulty: Difficulty,
    pub expeditions: u32,
    /// Exchange budget per expedition.
    pub max_rounds: u32,
    /// Directory with `config.toml`, `bestiary.ron` and `loot.ron`.
    pub content_dir: Option<PathBuf>,
    pub report: ReportFormat,
    pub session_id: Option<String>,
    pub log_to_file: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            character_name: String::new(),
            class: CharacterClass::Fighter,
            difficulty: Difficulty::Normal,
            expeditions: 3,
            max_rounds: 500,
            content_dir: None,
            report: ReportFormat::Text,
            session_id: None,
            log_to_file: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BRIDGEWORLD_SEED` - Session seed (default: random)
    /// - `BRIDGEWORLD_NAME` - Character name (default: class name)
    /// - `BRIDGEWORLD_CLASS` - Character class (default: Fighter)
    /// - `BRIDGEWORLD_DIFFICULTY` - normal, nightmare or hell (default: normal)
    /// - `BRIDGEWORLD_EXPEDITIONS` - Dungeons to play (default: 3)
    /// - `BRIDGEWORLD_MAX_ROUNDS` - Exchanges per dungeon (default: 500)
    /// - `BRIDGEWORLD_CONTENT_DIR` - Content directory (default: built-in content)
    /// - `BRIDGEWORLD_REPORT` - text or json (default: text)
    /// - `BRIDGEWORLD_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `BRIDGEWORLD_LOG_FILE` - Also write logs to the cache dir (default: false)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "BRIDGEWORLD_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(name) = lookup("BRIDGEWORLD_NAME") {
            config.character_name = name;
        }
        if let Some(class) = lookup("BRIDGEWORLD_CLASS") {
            config.class = CharacterClass::parse(&class)?;
        }
        if let Some(difficulty) = lookup("BRIDGEWORLD_DIFFICULTY") {
            config.difficulty = Difficulty::parse(&difficulty)?;
        }
        if let Some(expeditions) = read_var::<u32>(&lookup, "BRIDGEWORLD_EXPEDITIONS")? {
            config.expeditions = expeditions;
        }
        if let Some(max_rounds) = read_var::<u32>(&lookup, "BRIDGEWORLD_MAX_ROUNDS")? {
            config.max_rounds = max_rounds.max(1);
        }
        config.content_dir = lookup("BRIDGEWORLD_CONTENT_DIR").map(PathBuf::from);
        if let Some(report) = lookup("BRIDGEWORLD_REPORT") {
            config.report = report.parse()?;
        }
        config.session_id = lookup("BRIDGEWORLD_SESSION_ID");

        // A bare variable with no recognised value also turns file logging on.
        if let Some(value) = lookup("BRIDGEWORLD_LOG_FILE") {
            config.log_to_file = value.trim().parse::<bool>().unwrap_or(value.trim() != "0");
        }

        Ok(config)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| value.trim().parse::<T>())
        .transpose()
        .with_context(|| format!("invalid value for {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<ClientConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]).expect("defaults"), ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("BRIDGEWORLD_SEED", "42"),
            ("BRIDGEWORLD_NAME", "Aria"),
            ("BRIDGEWORLD_CLASS", "spellcaster"),
            ("BRIDGEWORLD_DIFFICULTY", "Hell"),
            ("BRIDGEWORLD_EXPEDITIONS", "7"),
            ("BRIDGEWORLD_REPORT", "json"),
            ("BRIDGEWORLD_LOG_FILE", "1"),
        ])
        .expect("valid environment");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.character_name, "Aria");
        assert_eq!(config.class, CharacterClass::Spellcaster);
        assert_eq!(config.difficulty, Difficulty::Hell);
        assert_eq!(config.expeditions, 7);
        assert_eq!(config.report, ReportFormat::Json);
        assert!(config.log_to_file);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(config_from(&[("BRIDGEWORLD_SEED", "abc")]).is_err());
        assert!(config_from(&[("BRIDGEWORLD_CLASS", "Bard")]).is_err());
        assert!(config_from(&[("BRIDGEWORLD_DIFFICULTY", "easy")]).is_err());
        assert!(config_from(&[("BRIDGEWORLD_REPORT", "xml")]).is_err());
    }

    #[test]
    fn log_file_flag_accepts_false() {
        let config = config_from(&[("BRIDGEWORLD_LOG_FILE", "false")]).expect("valid");
        assert!(!config.log_to_file);
        let config = config_from(&[("BRIDGEWORLD_LOG_FILE", "0")]).expect("valid");
        assert!(!config.log_to_file);
    }
}
