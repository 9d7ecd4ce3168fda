//! Process configuration, read once from the environment at start-up.

use std::path::PathBuf;

const HOST_ENV: &str = "ASSETS_HOST";
const PORT_ENV: &str = "ASSETS_PORT";
const DB_PATH_ENV: &str = "ASSETS_DB_PATH";
const STATIC_DIR_ENV: &str = "ASSETS_STATIC_DIR";
const ADMIN_USER_ENV: &str = "ASSETS_ADMIN_USER";
const ADMIN_PASSWORD_ENV: &str = "ASSETS_ADMIN_PASSWORD";
const PAGE_SIZE_ENV: &str = "ASSETS_PAGE_SIZE";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "assets.sqlite";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_ADMIN: &str = "admin";
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Root of `/static/*`; HTML pages live under `templates/` inside it.
    pub static_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            admin_username: DEFAULT_ADMIN.to_string(),
            admin_password: DEFAULT_ADMIN.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            host: read(HOST_ENV).unwrap_or(defaults.host),
            port: read(PORT_ENV)
                .and_then(|raw| raw.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            database_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            static_dir: read(STATIC_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            admin_username: read(ADMIN_USER_ENV).unwrap_or(defaults.admin_username),
            admin_password: read(ADMIN_PASSWORD_ENV).unwrap_or(defaults.admin_password),
            page_size: read(PAGE_SIZE_ENV)
                .and_then(|raw| raw.parse::<usize>().ok())
                .filter(|size| *size >= 1)
                .unwrap_or(defaults.page_size),
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.static_dir.join("templates")
    }
}
