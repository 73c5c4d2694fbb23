use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use retail_api::routes::create_router;
use retail_api::state::AppState;
use retail_core::services::{BranchService, FranchiseService, ProductService, StockReportService};
use retail_infrastructure::database::{connection, schema};
use retail_infrastructure::{
    create_redis_pool, PgBranchRepository, PgFranchiseRepository, PgProductRepository, RedisCache,
};
use retail_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    retail_shared::telemetry::init_telemetry();

    info!("Retail server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database at {}...", config.database.url);
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    schema::init_schema(&pool).await?;
    info!("Database connection established.");

    // Redis connections are lazy; an unreachable cache degrades reads to the
    // store instead of failing startup.
    let redis_pool = create_redis_pool(&config.redis.url, config.redis.max_connections)?;
    let cache = Arc::new(RedisCache::new(redis_pool));

    // Wire repositories and services
    let franchise_repo = Arc::new(PgFranchiseRepository::new(pool.clone()));
    let branch_repo = Arc::new(PgBranchRepository::new(pool.clone()));
    let product_repo = Arc::new(PgProductRepository::new(pool));

    let state = AppState {
        franchises: Arc::new(FranchiseService::new(franchise_repo.clone(), cache)),
        branches: Arc::new(BranchService::new(branch_repo.clone(), franchise_repo.clone())),
        products: Arc::new(ProductService::new(product_repo.clone(), branch_repo.clone())),
        reports: Arc::new(StockReportService::new(franchise_repo, branch_repo, product_repo)),
    };

    // Build router
    let app = create_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
