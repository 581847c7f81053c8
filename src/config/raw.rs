use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("reviewpoints.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub tokens: Option<Tokens>,
    pub restrictions: Option<Restrictions>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tokens {
    #[serde(deserialize_with = "deserialize_duration")]
    pub expire_in: Duration,
    pub refill_threshold: usize,
    pub refill_batch_size: usize,
    pub max_batch_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Restrictions {
    pub low_rating_threshold: usize,
    #[serde(deserialize_with = "deserialize_duration")]
    pub low_rating_window: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub freeze_duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 24 * 60 * 60;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::try_default().unwrap();
        let db = cfg.db.unwrap();
        assert_eq!("reviewpoints.sqlite", db.connection_sqlite);
        assert_eq!(10, db.connection_pool_size);
        let tokens = cfg.tokens.unwrap();
        assert_eq!(Duration::from_secs(3 * DAY), tokens.expire_in);
        assert_eq!(5, tokens.refill_threshold);
        assert_eq!(20, tokens.refill_batch_size);
        assert_eq!(1_000, tokens.max_batch_size);
        let restrictions = cfg.restrictions.unwrap();
        assert_eq!(3, restrictions.low_rating_threshold);
        assert_eq!(Duration::from_secs(7 * DAY), restrictions.low_rating_window);
        assert_eq!(Duration::from_secs(7 * DAY), restrictions.freeze_duration);
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str(
            r#"
            [tokens]
            expire-in = "30m"
            refill-threshold = 0
            refill-batch-size = 1
            max-batch-size = 1
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        assert!(cfg.restrictions.is_none());
        assert_eq!(Duration::from_secs(30 * 60), cfg.tokens.unwrap().expire_in);
    }

    #[test]
    fn reject_invalid_durations() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            [restrictions]
            low-rating-threshold = 3
            low-rating-window = "one week"
            freeze-duration = "7d"
            "#,
        );
        assert!(res.is_err());
    }
}
