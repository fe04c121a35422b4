use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::constant::DEFAULT_API_VERSION;
use crate::utils::Pipe;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: App,
    pub api: Api,
    pub postgres: PostgresConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct App {
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Local,
    Dev,
    Prod,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Api {
    pub version: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostgresConfig {
    pub user: String,
    pub password: String,
    pub db: String,
    pub host: String,
    pub port: u16,
    pub ssl: bool,
}

impl PostgresConfig {
    pub fn url(&self) -> String {
        let mode = if self.ssl { "require" } else { "disable" };

        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={mode}",
            utf8_percent_encode(&self.user, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.password, NON_ALPHANUMERIC),
            self.host,
            self.port,
            self.db
        )
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `config.dev.toml` in debug builds,
    /// then environment variables such as `POSTGRES_HOST`.
    pub fn init() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("config").required(false))
            .pipe(|cfg| {
                #[cfg(debug_assertions)]
                let cfg = cfg.add_source(
                    File::with_name("config.dev").required(false),
                );

                cfg
            })
            .add_source(
                Environment::default().separator("_").try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("app.host", "0.0.0.0")?
        .set_default("app.port", 8080)?
        .set_default("app.env", "local")?
        .set_default("api.version", i64::from(DEFAULT_API_VERSION))?
        .set_default("postgres.user", "postgres")?
        .set_default("postgres.password", "postgres")?
        .set_default("postgres.db", "music")?
        .set_default("postgres.host", "localhost")?
        .set_default("postgres.port", 5432)?
        .set_default("postgres.ssl", false)
}
