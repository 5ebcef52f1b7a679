use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// 기동 시 테이블 자동 생성 여부 (`DB_SCHEMA_UPDATE`)
    pub db_schema_update: bool,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_url: "sqlite://party.db?mode=rwc".to_string(),
            db_max_connections: 10,
            db_schema_update: false,
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.server_port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!(
                "DATABASE_URL is not set, falling back to {}",
                defaults.database_url
            );
            defaults.database_url.clone()
        });

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => defaults.db_max_connections,
        };

        let db_schema_update = lookup("DB_SCHEMA_UPDATE")
            .map(|raw| {
                raw.parse::<bool>().unwrap_or_else(|_| {
                    tracing::warn!(
                        "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
                    );
                    false
                })
            })
            .unwrap_or(defaults.db_schema_update);

        let log_dir = lookup("LOG_DIR").unwrap_or(defaults.log_dir);

        Ok(Self {
            server_port,
            database_url,
            db_max_connections,
            db_schema_update,
            log_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid DB_MAX_CONNECTIONS value: {0}")]
    InvalidMaxConnections(String),
}
