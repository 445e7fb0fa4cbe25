//! Server setup and initialization
//!
//! Provides the application builder, state construction and the server runner.

use std::sync::Arc;

use axum::Router;
use ngo_common::{AppConfig, AppError, JwtService};
use ngo_db::{create_pool, PoolConfig};
use ngo_service::{AuthService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get the base stack only, so probes are never rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(apply_middleware(health_routes())).with_state(state))
}

/// Connect to PostgreSQL, apply the schema and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool_config = PoolConfig::new(config.database.url.clone()).with_connections(
        config.database.min_connections,
        config.database.max_connections,
    );
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ngo_db::schema::apply(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let service_context = finish_context(ServiceContextBuilder::postgres(pool), &config)?;
    bootstrap_admin(&service_context, &config).await?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState over fresh in-memory repositories
///
/// No database is involved; used by tests and local experiments.
pub async fn create_in_memory_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = finish_context(ServiceContextBuilder::in_memory(), &config)?;
    bootstrap_admin(&service_context, &config).await?;

    Ok(AppState::new(service_context, config))
}

fn finish_context(
    builder: ServiceContextBuilder,
    config: &AppConfig,
) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expiry));

    builder
        .jwt_service(jwt_service)
        .page_size(config.pagination.page_size)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

async fn bootstrap_admin(ctx: &ServiceContext, config: &AppConfig) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        return Ok(());
    };

    let created = AuthService::new(ctx)
        .bootstrap_admin(&admin.email, &admin.password)
        .await?;
    if created {
        info!(email = %admin.email, "Bootstrapped administrator account");
    }

    Ok(())
}

/// Serve `app` on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {}", e)))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    serve(listener, app).await
}
