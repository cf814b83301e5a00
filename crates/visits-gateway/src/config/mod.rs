//! Environment config loader.
//!
//! Every value is read once at startup. A variable that is set but empty is
//! treated as unset.

pub mod schema;

pub use schema::Config;

pub const ENV_REDIS_ADDR: &str = "REDIS_ADDR";
pub const ENV_REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const ENV_APP_PORT: &str = "APP_PORT";

/// Load config from the process environment.
pub fn load_from_env() -> Config {
    load_with(|key| std::env::var(key).ok())
}

/// Load config through an arbitrary lookup (tests pass a map here).
pub fn load_with<F>(lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let defaults = Config::default();

    Config {
        redis_addr: get(ENV_REDIS_ADDR).unwrap_or(defaults.redis_addr),
        redis_password: get(ENV_REDIS_PASSWORD).or(defaults.redis_password),
        app_port: get(ENV_APP_PORT).unwrap_or(defaults.app_port),
    }
}
