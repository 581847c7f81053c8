use anyhow::{anyhow, bail, Result};
use rp_core::usecases::{Policy, RestrictionPolicy, TokenPolicy};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "reviewpoints.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub policy: Policy,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

const SQLITE_IN_MEMORY: &str = ":memory:";

impl Db {
    /// Each connection to an in-memory database opens its own empty database.
    pub fn pool_size(&self) -> u32 {
        if self.conn_sqlite == SQLITE_IN_MEMORY && self.conn_pool_size > 1 {
            log::warn!(
                "Limiting the pool size of the in-memory database from {} to 1",
                self.conn_pool_size
            );
            return 1;
        }
        self.conn_pool_size.into()
    }
}

fn try_duration(from: std::time::Duration, name: &str) -> Result<time::Duration> {
    let duration = time::Duration::try_from(from)
        .map_err(|_| anyhow!("The {name} duration is out of range"))?;
    if duration.is_zero() {
        bail!("The {name} duration must not be zero");
    }
    Ok(duration)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            tokens,
            restrictions,
        } = from;

        // Missing sections are taken from the embedded defaults
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            bail!("The DB connection pool must not be empty");
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Tokens {
            expire_in,
            refill_threshold,
            refill_batch_size,
            max_batch_size,
        } = tokens
            .or(defaults.tokens)
            .ok_or_else(|| anyhow!("Missing tokens configuration"))?;
        if refill_batch_size == 0 || refill_batch_size > max_batch_size {
            bail!("The refill batch size must be within 1..={max_batch_size}");
        }
        let tokens = TokenPolicy {
            expire_in: try_duration(expire_in, "token expiration")?,
            refill_threshold,
            refill_batch_size,
            max_batch_size,
        };

        let raw::Restrictions {
            low_rating_threshold,
            low_rating_window,
            freeze_duration,
        } = restrictions
            .or(defaults.restrictions)
            .ok_or_else(|| anyhow!("Missing restrictions configuration"))?;
        if low_rating_threshold == 0 {
            bail!("The low rating threshold must be positive");
        }
        let restrictions = RestrictionPolicy {
            low_rating_threshold,
            low_rating_window: try_duration(low_rating_window, "low rating window")?,
            freeze_duration: try_duration(freeze_duration, "freeze")?,
        };

        Ok(Self {
            db,
            policy: Policy {
                tokens,
                restrictions,
            },
        })
    }
}
