use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::{DbProviders, default_registry};
use crate::{
    config::DatabaseConfig,
    error::{GenerateError, GenerateResult},
};

/// Opens a connection through the default provider registry.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let providers = default_registry()?;
    Ok(connect_with(&providers, cfg).await?)
}

/// Opens and pings a connection. Nothing is retried.
pub async fn connect_with(
    providers: &DbProviders,
    cfg: &DatabaseConfig,
) -> GenerateResult<DatabaseConnection> {
    let provider = providers.provider_for_url(&cfg.url)?;

    let db = provider
        .connect(cfg)
        .await
        .map_err(GenerateError::Connection)?;
    provider
        .post_connect(&db, cfg)
        .await
        .map_err(GenerateError::Connection)?;
    db.ping().await.map_err(GenerateError::Connection)?;

    info!(provider = provider.id().as_str(), "connected to database");
    Ok(db)
}
