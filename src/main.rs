mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{AppConfig, Config, RuntimeMode};
use crate::core::router::{create_router, Services};
use crate::features::deletions::DeleteService;
use crate::features::transforms::TransformService;
use crate::features::uploads::UploadService;
use crate::modules::cloudinary::{AssetStore, CloudinaryClient, DeliveryUrlBuilder};
use axum::Router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Function runtimes collect stdout lines, so they get JSON; servers get the human format
fn init_tracing(mode: RuntimeMode) {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    match mode {
        RuntimeMode::Lambda => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .without_time(),
            )
            .init(),
        RuntimeMode::Server => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    let mode = RuntimeMode::from_env();
    init_tracing(mode);

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Starting in {:?} mode: tokio_worker_threads={}, pid={}",
        config.runtime,
        worker_threads,
        std::process::id()
    );

    // Initialize Cloudinary client (credentials are fixed for the life of the process)
    let store: Arc<dyn AssetStore> = Arc::new(
        CloudinaryClient::new(config.cloudinary.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Cloudinary client: {}", e))?,
    );

    let services = Services {
        upload: Arc::new(UploadService::new(Arc::clone(&store))),
        delete: Arc::new(DeleteService::new(Arc::clone(&store))),
        transform: Arc::new(TransformService::new(DeliveryUrlBuilder::from_config(
            &config.cloudinary,
        ))),
    };
    tracing::info!("Media services initialized");

    let app = create_router(services, config.app.max_request_body_size);

    match config.runtime {
        RuntimeMode::Lambda => {
            tracing::info!("Handing requests over to the Lambda runtime");
            lambda_http::run(app)
                .await
                .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
        }
        RuntimeMode::Server => serve(app, &config.app).await,
    }
}

async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    Ok(())
}
