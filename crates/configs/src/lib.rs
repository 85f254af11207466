use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAIL_DB_PATH: &str = "data/mail_db.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the full mail collection.
    #[serde(default = "default_mail_db_path")]
    pub mail_db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { mail_db_path: DEFAULT_MAIL_DB_PATH.into() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format `{other}`, expected compact|json")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_mail_db_path() -> String { DEFAULT_MAIL_DB_PATH.to_string() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when present; otherwise built from env vars.
    /// A config file that exists but fails to parse is an error.
    pub fn load_or_env() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()?
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(path) = std::env::var("MAIL_DB_PATH") {
            cfg.storage.mail_db_path = path;
        }
        if let Ok(fmt) = std::env::var("LOG_FORMAT") {
            cfg.logging.format = fmt.parse()?;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.mail_db_path.trim().is_empty() {
            return Err(anyhow!("storage.mail_db_path is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() -> Result<()> {
        let mut cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8088
            worker_threads = 2

            [storage]
            mail_db_path = "/tmp/mail.json"

            [logging]
            format = "json"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.storage.mail_db_path, "/tmp/mail.json");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.server.bind_addr()?.port(), 8088);
        Ok(())
    }

    #[test]
    fn empty_file_uses_defaults() -> Result<()> {
        let mut cfg = load_from_str("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.mail_db_path, DEFAULT_MAIL_DB_PATH);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        Ok(())
    }

    #[test]
    fn normalize_fixes_host_and_threads() -> Result<()> {
        let mut cfg = load_from_str("[server]\nhost = \" \"\nport = 1\nworker_threads = 0\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.worker_threads, Some(4));
        Ok(())
    }

    #[test]
    fn rejects_bad_values() -> Result<()> {
        let mut zero_port = load_from_str("[server]\nport = 0\n")?;
        assert!(zero_port.normalize_and_validate().is_err());

        let mut empty_path = load_from_str("[storage]\nmail_db_path = \"\"\n")?;
        assert!(empty_path.normalize_and_validate().is_err());

        assert!(load_from_str("[logging]\nformat = \"xml\"\n").is_err());
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("JSON".parse::<LogFormat>()?, LogFormat::Json);
        Ok(())
    }
}
