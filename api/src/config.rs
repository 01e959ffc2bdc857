use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use shared::FieldNaming;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Server configuration read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub field_naming: FieldNaming,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            field_naming: FieldNaming::Declared,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default(&lookup, "HOST", DEFAULT_HOST, |raw| raw.parse().ok());
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT, |raw| {
            raw.parse::<u16>().ok().filter(|port| *port > 0)
        });
        let field_naming = parse_or_default(
            &lookup,
            "FIELD_NAMING",
            FieldNaming::Declared,
            FieldNaming::from_config,
        );

        tracing::info!(%host, port, ?field_naming, "Server configured");

        Self {
            host,
            port,
            field_naming,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<F, T, P>(lookup: &F, key: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::fmt::Debug,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        Some(raw) => match parse(raw.trim()) {
            Some(value) => value,
            None => {
                tracing::warn!("Invalid value for {key} (`{raw}`), using default {default:?}");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(matches!(config.field_naming, FieldNaming::Declared));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("FIELD_NAMING", "json"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert!(matches!(config.field_naming, FieldNaming::Json));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("HOST", "nowhere"),
            ("PORT", "0"),
            ("FIELD_NAMING", "kebab"),
        ]);
        assert_eq!(config.socket_addr(), AppConfig::default().socket_addr());
        assert!(matches!(config.field_naming, FieldNaming::Declared));
    }

    #[test]
    fn test_port_out_of_range() {
        assert_eq!(config_from(&[("PORT", "70000")]).port, 8080);
    }
}
