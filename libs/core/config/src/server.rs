use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Port the HTTP listener binds when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Listener address for the HTTP API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Bind address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// - HOST: all interfaces (`0.0.0.0`) when unset
    /// - PORT: [`DEFAULT_PORT`] when unset, must fit in a `u16`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string()),
            port: env_parse_or_default("PORT", DEFAULT_PORT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listens_on_all_interfaces_by_default() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_host_and_port_overrides() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("3003"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(
                    config,
                    ServerConfig {
                        host: "127.0.0.1".to_string(),
                        port: 3003,
                    }
                );
                assert_eq!(config.address(), "127.0.0.1:3003");
            },
        );
    }

    #[test]
    fn test_port_must_be_a_u16() {
        for bad in ["not_a_number", "99999", "-1"] {
            temp_env::with_var("PORT", Some(bad), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "PORT"));
            });
        }
    }
}
