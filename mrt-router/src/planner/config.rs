//! Travel-time configuration for the route planner.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error loading a timing configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read timing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid timing config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timing config: {field} must be at least 1 minute")]
    ZeroMinutes { field: &'static str },
}

/// Travel-time constants, in minutes, per time-of-day category.
///
/// Fields missing from a config file keep their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Lines that are slower between stations during peak hours.
    pub peak_slow_lines: Vec<String>,
    /// Minutes between stations on a slow line during peak hours.
    pub peak_slow_mins: u32,
    /// Minutes between stations on other lines during peak hours.
    pub peak_mins: u32,

    /// Lines that are faster between stations outside peak hours.
    pub non_peak_fast_lines: Vec<String>,
    pub non_peak_fast_mins: u32,
    pub non_peak_mins: u32,

    /// Lines that are faster between stations at night.
    pub night_fast_lines: Vec<String>,
    pub night_fast_mins: u32,
    pub night_mins: u32,

    /// Minutes between stations outside every named category.
    pub default_next_station_mins: u32,

    /// Minutes to change line during peak hours.
    pub peak_change_mins: u32,
    /// Minutes to change line outside peak hours and at night.
    pub off_peak_change_mins: u32,
    /// Minutes to change line outside every named category.
    pub default_change_mins: u32,

    /// Lines that do not run at night. Empty means every line runs.
    pub night_closed_lines: Vec<String>,
}

impl TimingConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every travel time is positive.
    ///
    /// A zero weight would read as a missing edge in the travel graph.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let minutes = [
            ("peak_slow_mins", self.peak_slow_mins),
            ("peak_mins", self.peak_mins),
            ("non_peak_fast_mins", self.non_peak_fast_mins),
            ("non_peak_mins", self.non_peak_mins),
            ("night_fast_mins", self.night_fast_mins),
            ("night_mins", self.night_mins),
            ("default_next_station_mins", self.default_next_station_mins),
            ("peak_change_mins", self.peak_change_mins),
            ("off_peak_change_mins", self.off_peak_change_mins),
            ("default_change_mins", self.default_change_mins),
        ];
        match minutes.iter().find(|&&(_, mins)| mins == 0) {
            Some(&(field, _)) => Err(ConfigError::ZeroMinutes { field }),
            None => Ok(()),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            peak_slow_lines: vec!["NS".into(), "NE".into()],
            peak_slow_mins: 12,
            peak_mins: 10,
            non_peak_fast_lines: vec!["DT".into(), "TE".into()],
            non_peak_fast_mins: 8,
            non_peak_mins: 10,
            night_fast_lines: vec!["TE".into()],
            night_fast_mins: 8,
            night_mins: 10,
            default_next_station_mins: 2,
            peak_change_mins: 15,
            off_peak_change_mins: 10,
            default_change_mins: 5,
            night_closed_lines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = TimingConfig::default();

        assert_eq!(config.peak_slow_lines, vec!["NS", "NE"]);
        assert_eq!(config.peak_slow_mins, 12);
        assert_eq!(config.peak_mins, 10);
        assert_eq!(config.non_peak_fast_lines, vec!["DT", "TE"]);
        assert_eq!(config.non_peak_fast_mins, 8);
        assert_eq!(config.non_peak_mins, 10);
        assert_eq!(config.night_fast_lines, vec!["TE"]);
        assert_eq!(config.night_fast_mins, 8);
        assert_eq!(config.night_mins, 10);
        assert_eq!(config.default_next_station_mins, 2);
        assert_eq!(config.peak_change_mins, 15);
        assert_eq!(config.off_peak_change_mins, 10);
        assert_eq!(config.default_change_mins, 5);
        assert!(config.night_closed_lines.is_empty());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TimingConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: TimingConfig = serde_json::from_str(
            r#"{ "default_next_station_mins": 3, "night_closed_lines": ["DT"] }"#,
        )
        .unwrap();

        assert_eq!(config.default_next_station_mins, 3);
        assert_eq!(config.night_closed_lines, vec!["DT"]);
        assert_eq!(config.peak_change_mins, 15);
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, r#"{ "default_change_mins": 7 }"#).unwrap();

        let config = TimingConfig::from_json_file(&path).unwrap();
        assert_eq!(config.default_change_mins, 7);
    }

    #[test]
    fn load_errors() {
        let err = TimingConfig::from_json_file("/nonexistent/timings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));

        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = TimingConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_minutes_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, r#"{ "non_peak_mins": 0 }"#).unwrap();

        let err = TimingConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroMinutes {
                field: "non_peak_mins"
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid timing config: non_peak_mins must be at least 1 minute"
        );

        let config = TimingConfig {
            peak_change_mins: 0,
            ..TimingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroMinutes {
                field: "peak_change_mins"
            })
        ));
    }
}
