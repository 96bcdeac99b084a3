use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "appointment.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub graphql_path: String,
    /// Serve the GraphiQL IDE on `GET {graphql_path}`.
    pub graphiql: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            graphql_path: "/graphql".to_string(),
            graphiql: true,
        }
    }
}

impl ServiceConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            tracing::info!("Config file not found at {path}, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(?config, "Loaded service config from {path}");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(content)?;
        if !config.graphql_path.starts_with('/') {
            return Err(format!(
                "graphql_path must start with '/', got {:?}",
                config.graphql_path
            )
            .into());
        }
        Ok(config)
    }

    /// Applies `SERVER_PORT` when it holds a valid port number.
    pub fn with_port_override(mut self, port: Option<&str>) -> Self {
        match port.map(str::parse::<u16>) {
            Some(Ok(port)) => self.port = port,
            Some(Err(e)) => tracing::warn!("Ignoring invalid SERVER_PORT: {e}"),
            None => {}
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
