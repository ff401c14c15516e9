use std::{str::FromStr, time::Duration};

use thiserror::Error;

use crate::{catalog::CardFallback, playback::session::DEFAULT_VOLUME};

pub const ENV_PREFIX: &str = "ASCENDION";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("{key} must be greater than zero")]
    NotPositive { key: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub volume: f64,
    pub volume_step: f64,
    pub seek_step_secs: i64,
    pub tick_interval: Duration,
    /// Cards played from the home page.
    pub home_card: CardFallback,
    /// Cards played from search results and the library.
    pub browse_card: CardFallback,
    /// Page opened on launch, as a path such as `/search?q=jazz`.
    pub start_route: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            volume_step: 5.0,
            seek_step_secs: 5,
            tick_interval: Duration::from_millis(1000),
            home_card: CardFallback::new(240, "Various Artists"),
            browse_card: CardFallback::new(210, "Unknown"),
            start_route: "/".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(volume) = read::<f64, _>(&lookup, "VOLUME")? {
            config.volume = volume.clamp(0.0, 100.0);
        }
        if let Some(step) = read::<f64, _>(&lookup, "VOLUME_STEP")? {
            config.volume_step = positive(step, step > 0.0, "VOLUME_STEP")?;
        }
        if let Some(step) = read::<i64, _>(&lookup, "SEEK_STEP_SECS")? {
            config.seek_step_secs = positive(step, step > 0, "SEEK_STEP_SECS")?;
        }
        if let Some(ms) = read::<u64, _>(&lookup, "TICK_MS")? {
            config.tick_interval = Duration::from_millis(positive(ms, ms > 0, "TICK_MS")?);
        }
        if let Some(secs) = read::<u32, _>(&lookup, "HOME_CARD_SECS")? {
            config.home_card.duration_secs = positive(secs, secs > 0, "HOME_CARD_SECS")?;
        }
        if let Some(artist) = read::<String, _>(&lookup, "HOME_CARD_ARTIST")? {
            config.home_card.artist = artist;
        }
        if let Some(secs) = read::<u32, _>(&lookup, "BROWSE_CARD_SECS")? {
            config.browse_card.duration_secs = positive(secs, secs > 0, "BROWSE_CARD_SECS")?;
        }
        if let Some(artist) = read::<String, _>(&lookup, "BROWSE_CARD_ARTIST")? {
            config.browse_card.artist = artist;
        }
        if let Some(route) = read::<String, _>(&lookup, "START_ROUTE")? {
            config.start_route = route;
        }

        Ok(config)
    }
}

fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}_{name}")
}

fn read<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let key = env_key(name);
    match lookup(&key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn positive<T>(value: T, is_positive: bool, name: &str) -> Result<T, ConfigError> {
    if is_positive {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { key: env_key(name) })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = PlayerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.volume, 50.0);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn overrides_are_applied() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("ASCENDION_VOLUME", "80"),
            ("ASCENDION_TICK_MS", "250"),
            ("ASCENDION_SEEK_STEP_SECS", " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.volume, 80.0);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.seek_step_secs, 10);
    }

    #[test]
    fn volume_override_is_clamped() {
        let config = PlayerConfig::from_lookup(lookup(&[("ASCENDION_VOLUME", "140")])).unwrap();
        assert_eq!(config.volume, 100.0);
    }

    #[test]
    fn unparsable_value_is_reported_with_its_key() {
        let err = PlayerConfig::from_lookup(lookup(&[("ASCENDION_TICK_MS", "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "ASCENDION_TICK_MS".into(),
                value: "fast".into()
            }
        );
    }

    #[test]
    fn card_fallbacks_differ_between_home_and_browsing() {
        let config = PlayerConfig::default();
        assert_eq!(config.home_card, CardFallback::new(240, "Various Artists"));
        assert_eq!(config.browse_card, CardFallback::new(210, "Unknown"));

        let config = PlayerConfig::from_lookup(lookup(&[
            ("ASCENDION_BROWSE_CARD_SECS", "180"),
            ("ASCENDION_BROWSE_CARD_ARTIST", " Anonymous "),
        ]))
        .unwrap();
        assert_eq!(config.browse_card, CardFallback::new(180, "Anonymous"));
        assert_eq!(config.home_card.duration_secs, 240);
    }

    #[test]
    fn start_route_is_read_verbatim() {
        let vars = [("ASCENDION_START_ROUTE", "/search?q=neon%20rider")];
        let config = PlayerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.start_route, "/search?q=neon%20rider");
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let err = PlayerConfig::from_lookup(lookup(&[("ASCENDION_TICK_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));
    }
}
