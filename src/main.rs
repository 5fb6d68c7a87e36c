use album_store::albums::handlers::*;
use album_store::albums::protocol::*;
use album_store::albums::store::AlbumStore;
use album_store::config::{AppConfig, Backend};
use album_store::storage::KvClient;
use album_store::storage::memory::MemoryClient;
use album_store::storage::redis::RedisClient;
use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [--bind <addr:port>] [--backend <redis|memory>]", args[0]);
        eprintln!("Redis is configured through REDIS_HOST, REDIS_PORT, REDIS_PASSWORD and REDIS_DB");
        eprintln!("Example: {} --bind 127.0.0.1:8080 --backend memory", args[0]);
        return Ok(());
    }

    let mut config = AppConfig::from_env()?;
    config.apply_args(&args)?;

    // 1. Key-value client, opened once and shared by every request:
    match config.backend {
        Backend::Redis => {
            let client = RedisClient::connect(&config.redis).await?;
            serve(AlbumStore::new(client), config.bind_addr).await
        }
        Backend::Memory => {
            tracing::warn!("Using the in-memory backend, albums are lost on exit");
            serve(AlbumStore::new(MemoryClient::new()), config.bind_addr).await
        }
    }
}

async fn serve<C: KvClient>(store: AlbumStore<C>, bind_addr: SocketAddr) -> anyhow::Result<()> {
    // 2. Storage layer:
    match store.count().await {
        Ok(count) => tracing::info!("Store holds {} albums", count),
        Err(e) => tracing::warn!("Could not count stored albums: {}", e),
    }
    let store = Arc::new(store);

    // 3. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_HOME, get(handle_home))
        .route(
            ENDPOINT_ALBUMS,
            get(handle_list_albums::<C>)
                .post(handle_create_albums::<C>)
                .delete(handle_delete_albums::<C>),
        )
        .route(
            ENDPOINT_ALBUM,
            get(handle_get_album::<C>).delete(handle_delete_album::<C>),
        )
        .route(
            ENDPOINT_ALBUM_EMPTY_ID,
            get(handle_empty_id).delete(handle_empty_id),
        )
        .route(ENDPOINT_VERSION, get(handle_version))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(store));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
