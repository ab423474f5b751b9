//! Redis-backed cache and Celery broker settings.

use serde::Serialize;

use edrak_core::env::EnvSnapshot;
use edrak_core::error::ConfigError;

pub const DEFAULT_REDIS_HOST: &str = "edrak_redis";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Redis database holding cached query results.
const CACHE_REDIS_DB: u8 = 1;
/// Redis database used as the Celery broker and result backend.
const BROKER_REDIS_DB: u8 = 0;

/// Location of the shared Redis instance. Env vars: `REDIS_HOST`, `REDIS_PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisEndpoint {
    pub host: String,
    pub port: u16,
}

impl RedisEndpoint {
    pub fn from_snapshot(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        Ok(Self {
            host: env.get_or("REDIS_HOST", DEFAULT_REDIS_HOST).to_owned(),
            port: env.parse_or("REDIS_PORT", DEFAULT_REDIS_PORT)?,
        })
    }

    pub fn url(&self, db: u8) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, db)
    }
}

impl Default for RedisEndpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.to_owned(),
            port: DEFAULT_REDIS_PORT,
        }
    }
}

/// Flask-Caching configuration, also used as the async results backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CacheConfig {
    pub cache_type: String,
    /// Seconds.
    pub cache_default_timeout: u32,
    pub cache_key_prefix: String,
    pub cache_redis_host: String,
    pub cache_redis_port: u16,
    pub cache_redis_db: u8,
    pub cache_redis_url: String,
}

impl CacheConfig {
    pub fn redis(endpoint: &RedisEndpoint) -> Self {
        Self {
            cache_type: "RedisCache".to_owned(),
            cache_default_timeout: 300,
            cache_key_prefix: "superset_".to_owned(),
            cache_redis_host: endpoint.host.clone(),
            cache_redis_port: endpoint.port,
            cache_redis_db: CACHE_REDIS_DB,
            cache_redis_url: endpoint.url(CACHE_REDIS_DB),
        }
    }
}

/// Celery worker configuration for async SQL Lab queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CeleryConfig {
    pub broker_url: String,
    pub imports: Vec<String>,
    pub result_backend: String,
    pub worker_prefetch_multiplier: u32,
    pub task_acks_late: bool,
}

impl CeleryConfig {
    pub fn redis(endpoint: &RedisEndpoint) -> Self {
        let url = endpoint.url(BROKER_REDIS_DB);
        Self {
            broker_url: url.clone(),
            imports: vec!["superset.sql_lab".to_owned()],
            result_backend: url,
            worker_prefetch_multiplier: 10,
            task_acks_late: true,
        }
    }
}
