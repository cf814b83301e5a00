use std::fmt;

/// Runtime configuration. No validation beyond presence happens here: a bad
/// store address fails at connect time, a bad port at bind time.
#[derive(Clone)]
pub struct Config {
    /// Store target, `host:port`.
    pub redis_addr: String,
    /// Store password; `None` means no AUTH.
    pub redis_password: Option<String>,
    /// HTTP listen port.
    pub app_port: String,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.app_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_addr: default_redis_addr(),
            redis_password: None,
            app_port: default_app_port(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("redis_addr", &self.redis_addr)
            .field("redis_password", &self.redis_password.as_ref().map(|_| "<redacted>"))
            .field("app_port", &self.app_port)
            .finish()
    }
}

fn default_redis_addr() -> String {
    "localhost:6379".into()
}
fn default_app_port() -> String {
    "8080".into()
}
