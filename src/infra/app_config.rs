use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ambient application configuration.
///
/// Nothing here is required: the refiner also reads `GEMINI_API_KEY` from the
/// environment, and exports default to the user's download directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NoteflowConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub export_dir: Option<PathBuf>,
}

pub fn load_config() -> NoteflowConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return NoteflowConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("NOTEFLOW_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("NOTEFLOW_DATA_HOME") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join("noteflow");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".noteflow")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        // Parse path directly instead of load_config to avoid touching the
        // process environment from a test.
        assert!(std::fs::read_to_string(&path).is_err());
        let config = NoteflowConfig::default();
        assert!(config.gemini_api_key.is_none());
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = NoteflowConfig {
            gemini_api_key: Some("key".to_string()),
            gemini_model: Some("gemini-3-flash-preview".to_string()),
            gemini_base_url: None,
            export_dir: Some(PathBuf::from("/tmp/cards")),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: NoteflowConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.gemini_api_key.as_deref(), Some("key"));
        assert_eq!(parsed.export_dir, Some(PathBuf::from("/tmp/cards")));
    }

    #[test]
    fn garbage_config_is_ignored() {
        let parsed: NoteflowConfig = toml::from_str("not = valid").unwrap_or_default();
        assert!(parsed.gemini_api_key.is_none());
    }
}
