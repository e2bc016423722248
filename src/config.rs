use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve GraphiQL on `GET /`
    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3334
}

fn default_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            playground: default_playground(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter level used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl BookshelfConfig {
    /// Load configuration for a command run from `start_path`.
    ///
    /// An explicit path must exist. Without one, the nearest `.bookshelf.toml`
    /// up the directory tree is used, falling back to defaults.
    pub fn load(start_path: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BookshelfError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match Self::find_config_file(start_path) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Address the server binds to. `host` must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse()?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookshelfConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3334);
        assert!(config.server.playground);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(
            BookshelfConfig::parse("").unwrap(),
            BookshelfConfig::default()
        );
    }

    #[test]
    fn test_parse_partial() {
        let config = BookshelfConfig::parse(
            r#"
[server]
port = 8080
playground = false

[logging]
file = "logs/bookshelf.log"
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.playground);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("logs/bookshelf.log"))
        );
    }

    #[test]
    fn test_parse_invalid() {
        let result = BookshelfConfig::parse("[server]\nport = \"not a number\"");
        assert!(matches!(result, Err(BookshelfError::Toml(_))));
    }

    #[test]
    fn test_socket_addr() {
        let mut config = BookshelfConfig::default();
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3334".parse::<SocketAddr>().unwrap()
        );

        config.server.host = "::1".to_string();
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:3334");

        config.server.host = "not-an-ip".to_string();
        assert!(matches!(
            config.socket_addr(),
            Err(BookshelfError::AddrParse(_))
        ));
    }

    #[test]
    fn test_find_config_file_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 4000\n",
        )
        .unwrap();

        let found = BookshelfConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(CONFIG_FILE_NAME));

        let config = BookshelfConfig::load(&nested, None).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let result = BookshelfConfig::load(temp_dir.path(), Some(&missing));
        assert!(matches!(result, Err(BookshelfError::Config(_))));
    }
}
