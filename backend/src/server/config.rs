//! HTTP server configuration object.

use crate::settings::ServiceSettings;

/// Listener address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Take the listener address from the loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self::new(settings.host(), settings.port())
    }

    /// Address passed to `HttpServer::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8082() {
        let config = ServerConfig::from_settings(&ServiceSettings::default());
        assert_eq!(config.bind_addr(), ("0.0.0.0", 8082));
    }
}
