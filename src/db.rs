use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::DbConfig;

/// Build the shared pool without touching the network; connections are
/// opened on first acquisition, up to the configured ceiling.
pub fn connect_pool(cfg: &DbConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_lazy(&cfg.url())?;
    Ok(pool)
}

/// Startup connectivity probe: one acquisition, logged either way. An
/// unreachable datastore is not fatal here; each request reports its
/// own failure.
pub async fn probe(pool: &PgPool) {
    match pool.acquire().await {
        Ok(_conn) => info!("database reachable"),
        Err(e) => warn!(error = %e, "database unreachable at startup; continuing"),
    }
}
