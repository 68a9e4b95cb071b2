//! Pachena resort booking service

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pachena_web::config::Config;
use pachena_web::db::{EnquiryStore, MemoryEnquiryStore, PgEnquiryStore};
use pachena_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pachena_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let catalog = config.load_catalog().context("failed to load pricing catalog")?;

    let store: Arc<dyn EnquiryStore> = match &config.database_url {
        Some(url) => Arc::new(
            PgEnquiryStore::connect(url, config.database_max_connections)
                .await
                .context("failed to connect to database")?,
        ),
        None => {
            tracing::warn!("DATABASE_URL not set, enquiries are kept in memory only");
            Arc::new(MemoryEnquiryStore::new())
        }
    };

    if config.staff.password_hash.is_none() {
        tracing::warn!("STAFF_PASSWORD_HASH not set, staff login is disabled");
    }

    let state = AppState::new(store, catalog, config.staff.clone(), config.contact.clone());
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
