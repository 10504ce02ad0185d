// VideoGen Configuration
// Copyright (c) 2026 Xing_The_Creator | VideoGen AI
//
// Settings come from the environment (a `.env` file is loaded in main)
// and may be overridden by command-line flags.

use crate::error::StudioResult;
use crate::studio::schedule::Schedule;
use crate::studio::tracker::StartMode;

pub const ENV_STEP_OFFSETS: &str = "VIDEOGEN_STEP_OFFSETS_MS";
pub const ENV_START_MODE: &str = "VIDEOGEN_START_MODE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudioConfig {
    pub schedule: Schedule,
    pub start_mode: StartMode,
}

impl StudioConfig {
    pub fn from_env() -> StudioResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> StudioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_STEP_OFFSETS) {
            config.schedule = Schedule::parse(&raw)?;
        }
        if let Some(raw) = lookup(ENV_START_MODE) {
            config.start_mode = raw.parse()?;
        }
        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        offsets: Option<&str>,
        start_mode: Option<StartMode>,
    ) -> StudioResult<Self> {
        if let Some(raw) = offsets {
            self.schedule = Schedule::parse(raw)?;
        }
        if let Some(mode) = start_mode {
            self.start_mode = mode;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn test_defaults_when_unset() {
        let config = StudioConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.start_mode, StartMode::AllProcessing);
    }

    #[test]
    fn test_reads_values() {
        let env: HashMap<&str, &str> = [
            (ENV_STEP_OFFSETS, "10,20,30,40"),
            (ENV_START_MODE, "cascade"),
        ]
        .into_iter()
        .collect();
        let config = StudioConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.start_mode, StartMode::Cascade);
        assert_eq!(config.schedule.total(), Duration::from_millis(40));
    }

    #[test]
    fn test_invalid_values_error() {
        assert!(StudioConfig::from_lookup(|k| {
            (k == ENV_START_MODE).then(|| "random".to_string())
        })
        .is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = StudioConfig::default()
            .with_overrides(Some("1,2,3,4"), Some(StartMode::Cascade))
            .unwrap();
        assert_eq!(config.schedule.total(), Duration::from_millis(4));
        assert_eq!(config.start_mode, StartMode::Cascade);
    }
}
