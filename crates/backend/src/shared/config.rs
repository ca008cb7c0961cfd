use contracts::system::auth::Role;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Accounts created at startup
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Directory for backend.log; defaults to `logs` next to the executable
    pub dir: Option<String>,
    /// EnvFilter directive used when RUST_LOG is not set
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret; a random one is generated when absent
    pub jwt_secret: Option<String>,
    #[serde(default = "default_access_token_hours")]
    pub access_token_hours: i64,
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_hours: default_access_token_hours(),
            refresh_token_days: default_refresh_token_days(),
        }
    }
}

fn default_access_token_hours() -> i64 {
    24
}

fn default_refresh_token_days() -> i64 {
    90
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
level = "info,tower_http=warn"

[auth]
access_token_hours = 24
refresh_token_days = 90

[[users]]
username = "admin"
password = "admin"
role = "Admin"
full_name = "Store Administrator"

[[users]]
username = "seller"
password = "seller"
role = "Seller"
full_name = "Demo Artisan"

[[users]]
username = "customer"
password = "customer"
role = "Customer"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the log directory: absolute paths as is, relative ones against
/// the executable directory.
pub fn get_log_dir(config: &Config) -> PathBuf {
    match config.logging.dir.as_deref() {
        Some(dir) if PathBuf::from(dir).is_absolute() => PathBuf::from(dir),
        Some(dir) => exe_dir()
            .map(|exe| exe.join(dir))
            .unwrap_or_else(|| PathBuf::from(dir)),
        None => exe_dir()
            .map(|exe| exe.join("logs"))
            .unwrap_or_else(|| PathBuf::from("target").join("logs")),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.users.len(), 3);
        assert_eq!(config.users[0].role, Role::Admin);
        assert_eq!(config.users[1].role, Role::Seller);
        assert!(config.users.iter().all(|u| u.is_active));
        assert!(config.auth.jwt_secret.is_none());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.auth.access_token_hours, 24);
        assert_eq!(config.auth.refresh_token_days, 90);
        assert!(config.users.is_empty());
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_absolute_log_dir_is_kept() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("storefront-logs");
        config.logging.dir = Some(abs.to_string_lossy().into_owned());
        assert_eq!(get_log_dir(&config), abs);
    }
}
