//! Gateway Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded by the binary). Values are only checked for presence and shape.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Deployment environment, selects the backend base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    Production,
    Development,
    #[default]
    Local,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Production => "production",
            AppEnv::Development => "development",
            AppEnv::Local => "local",
        }
    }

    /// Variable holding this environment's backend URL
    pub fn backend_url_var(&self) -> &'static str {
        match self {
            AppEnv::Production => "BACKEND_URL_PRODUCTION",
            AppEnv::Development => "BACKEND_URL_DEVELOPMENT",
            AppEnv::Local => "BACKEND_URL_LOCAL",
        }
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(AppEnv::Production),
            "development" | "dev" => Ok(AppEnv::Development),
            "local" => Ok(AppEnv::Local),
            other => Err(ConfigError::Invalid {
                name: "APP_ENV",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

const DEFAULT_LOCAL_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_SHARED_REPORT_MAX_TTL_HOURS: u64 = 720;

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub app_env: AppEnv,
    /// FastAPI backend base URL for `app_env`
    pub backend_base_url: String,
    /// Secret for the server-to-server public-share bypass
    pub internal_system_token: Option<String>,
    /// Origin used to build share links handed back to clients
    pub public_base_url: String,
    pub bind_addr: SocketAddr,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    /// Enables the Postgres shared-report store when set
    pub database_url: Option<String>,
    /// Longest lifetime a shared report may request
    pub shared_report_max_ttl: Duration,
}

impl GatewayConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let app_env = match get("APP_ENV").or_else(|| get("NEXT_PUBLIC_APP_ENV")) {
            Some(raw) => raw.parse()?,
            None => AppEnv::default(),
        };

        let backend_base_url = match get(app_env.backend_url_var()) {
            Some(url) => url,
            None if app_env == AppEnv::Local => DEFAULT_LOCAL_BACKEND_URL.to_string(),
            None => return Err(ConfigError::Missing(app_env.backend_url_var())),
        };
        if !backend_base_url.starts_with("http://") && !backend_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: app_env.backend_url_var(),
                value: backend_base_url,
            });
        }

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let shared_report_max_ttl_hours = match get("SHARED_REPORT_MAX_TTL_HOURS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "SHARED_REPORT_MAX_TTL_HOURS",
                value: raw.clone(),
            })?,
            None => DEFAULT_SHARED_REPORT_MAX_TTL_HOURS,
        };

        Ok(Self {
            app_env,
            backend_base_url: backend_base_url.trim_end_matches('/').to_string(),
            internal_system_token: get("INTERNAL_SYSTEM_TOKEN"),
            public_base_url: get("PUBLIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            bind_addr,
            frontend_origins,
            database_url: get("DATABASE_URL"),
            shared_report_max_ttl: Duration::from_secs(shared_report_max_ttl_hours * 3600),
        })
    }

    /// Configuration for tests and local tooling
    pub fn local(backend_base_url: impl Into<String>) -> Self {
        Self {
            app_env: AppEnv::Local,
            backend_base_url: backend_base_url.into(),
            internal_system_token: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            frontend_origins: Vec::new(),
            database_url: None,
            shared_report_max_ttl: Duration::from_secs(DEFAULT_SHARED_REPORT_MAX_TTL_HOURS * 3600),
        }
    }
}
