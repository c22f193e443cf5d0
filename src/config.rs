//! Server configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_COOKIE_NAME: &str = "todo_session";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address to bind (from TODO_LISTS_HOST)
    pub host: IpAddr,
    /// Port to bind (from TODO_LISTS_PORT)
    pub port: u16,
    /// Name of the session cookie (from TODO_LISTS_COOKIE_NAME)
    pub cookie_name: String,
    /// Mark the session cookie `Secure` (from TODO_LISTS_SECURE_COOKIE)
    pub secure_cookie: bool,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::local();

        let host = lookup("TODO_LISTS_HOST")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.host);

        let port = lookup("TODO_LISTS_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let cookie_name = lookup("TODO_LISTS_COOKIE_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| is_valid_cookie_name(s))
            .unwrap_or(defaults.cookie_name);

        let secure_cookie = lookup("TODO_LISTS_SECURE_COOKIE")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(defaults.secure_cookie);

        Self {
            host,
            port,
            cookie_name,
            secure_cookie,
        }
    }

    /// Localhost defaults (for local development/testing).
    pub fn local() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure_cookie: false,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Cookie names are RFC 6265 tokens.
fn is_valid_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.cookie_name, "todo_session");
        assert!(!config.secure_cookie);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TODO_LISTS_HOST", "0.0.0.0"),
            ("TODO_LISTS_PORT", "8080"),
            ("TODO_LISTS_COOKIE_NAME", "sid"),
            ("TODO_LISTS_SECURE_COOKIE", "true"),
        ]));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.cookie_name, "sid");
        assert!(config.secure_cookie);
    }

    #[test]
    fn ipv6_host_gives_bindable_address() {
        let config = AppConfig::from_lookup(lookup(&[("TODO_LISTS_HOST", "::1")]));
        let addr = config.bind_addr();

        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::1]:3000");
        assert_eq!(addr.to_string().parse::<SocketAddr>().ok(), Some(addr));
    }

    #[test]
    fn ignores_invalid_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TODO_LISTS_PORT", "not-a-port"),
            ("TODO_LISTS_COOKIE_NAME", "bad name;"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cookie_name, DEFAULT_COOKIE_NAME);
    }
}
