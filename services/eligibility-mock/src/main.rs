use clap::Parser;
use tracing::{info, warn};

use eligibility_mock::{catalog, config::{AllowedOrigins, Args}, router, AppState};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("ELIGIBILITY_MOCK_LOG_JSON").ok().as_deref() == Some("1");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_target(true).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let origins = AllowedOrigins::parse(&args.allowed_origins)?;

    // Catalog problems must stop us before the listener exists.
    let catalog = catalog::standard()?;
    info!(fixtures = catalog.len(), "fixture catalog loaded");

    let app = router(AppState::new(catalog), &origins, args.enable_openapi);

    let bind = args.bind_addr();
    info!(bind = %bind, openapi = args.enable_openapi, "eligibility-mock listening");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
