use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use bs_api::{config, create_app, AppState};
use bs_core::{PasswordHasher, TokenIssuer, TokenIssuerConfig};
use bs_infra::database::{MySqlBookRepository, MySqlUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load();
    config::init_tracing(&config.logging)?;

    tracing::info!(environment = ?config.environment, "Starting Bookshop API server");

    if config.insecure_for_environment() {
        anyhow::bail!("JWT_SECRET must be set to a non-default value in production");
    }

    let pool = bs_infra::initialize(config.database.clone())
        .await
        .context("failed to initialize the database")?;

    let token_config = TokenIssuerConfig::from_jwt_config(&config.auth.jwt)
        .context("invalid JWT configuration")?;
    let token_issuer = Arc::new(TokenIssuer::new(token_config));
    let password_hasher = PasswordHasher::from_config(&config.auth.password);

    let app_state = web::Data::new(
        AppState::new(
            Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
            Arc::new(MySqlBookRepository::new(pool.get_pool().clone())),
            token_issuer,
            password_hasher,
        )
        .with_max_payload_size(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
