use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use super::config::AppEnv;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub struct Logger {}

impl Logger {
    /// `RUST_LOG` overrides the default level.
    pub fn init(env: AppEnv) -> Result<(), BoxError> {
        let default_level = match env {
            AppEnv::Local | AppEnv::Dev => LevelFilter::DEBUG,
            AppEnv::Prod => LevelFilter::INFO,
        };

        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env()?
            .add_directive("rustls=off".parse()?)
            .add_directive("sqlx=warn".parse()?);

        let builder = tracing_subscriber::fmt()
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
            .with_env_filter(filter);

        match env {
            AppEnv::Local => builder.try_init(),
            AppEnv::Dev | AppEnv::Prod => builder
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .try_init(),
        }
    }
}
