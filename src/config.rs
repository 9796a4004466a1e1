use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

pub const HOST_ENV: &str = "REQECHO_HOST";
pub const PORT_ENV: &str = "REQECHO_PORT";
pub const BODY_LIMIT_ENV: &str = "REQECHO_BODY_LIMIT";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    sanitize_host(&env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string()))
}

pub fn get_port() -> u16 {
    env::var(PORT_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Maximum accepted request body in bytes. Zero or unparsable values use the default.
pub fn get_body_limit() -> usize {
    env::var(BODY_LIMIT_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_BODY_LIMIT)
}

pub fn sanitize_host(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        ServerConfig {
            host: get_host(),
            port: get_port(),
            body_limit: get_body_limit(),
        }
    }

    /// Command-line values take precedence over the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>, body_limit: Option<usize>) -> Self {
        if let Some(h) = host {
            self.host = sanitize_host(&h);
        }
        if let Some(p) = port {
            self.port = p;
        }
        if let Some(limit) = body_limit.filter(|l| *l > 0) {
            self.body_limit = limit;
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
