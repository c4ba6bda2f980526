//! Server configuration loaded from environment variables with defaults.

use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_COOKIE: &str = "todos-session-id";
const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 31 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Name of the cookie carrying the session id.
    pub session_cookie: String,
    pub session_max_age: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            session_max_age: Duration::from_secs(DEFAULT_SESSION_MAX_AGE_SECS),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// Environment variables:
    /// - `TODOS_HOST`: bind address (default: 127.0.0.1)
    /// - `PORT`: bind port (default: 3000)
    /// - `TODOS_SESSION_COOKIE`: session cookie name (default: todos-session-id)
    /// - `TODOS_SESSION_MAX_AGE_SECS`: cookie lifetime in seconds (default: 31 days)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    /// Unparseable values, and cookie names that are not a valid cookie-name
    /// token, fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("TODOS_HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            session_cookie: lookup("TODOS_SESSION_COOKIE")
                .filter(|v| is_cookie_name(v))
                .unwrap_or(defaults.session_cookie),
            session_max_age: lookup("TODOS_SESSION_MAX_AGE_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_max_age),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A non-empty cookie-name token: visible ASCII without separators.
fn is_cookie_name(name: &str) -> bool {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}
