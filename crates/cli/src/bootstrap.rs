use sqlx::SqlitePool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use warden_dns_domain::Config;

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn init_database(database_url: &str) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = warden_dns_infrastructure::database::create_pool(database_url)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("Database initialized successfully");
    Ok(pool)
}
