use cdss_core::config;
use cdss_core::GuidelineIndex;
use cdss_server::api::create_router;
use cdss_server::api::handlers::AppState;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cdss-server", about = "Clinical guideline recommendation server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CDSS_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "CDSS_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Guideline document (plain text, passages separated by blank lines)
    #[arg(short, long, env = "CDSS_GUIDELINES", default_value = config::DEFAULT_GUIDELINES_PATH)]
    guidelines: PathBuf,

    /// Exit at startup if the guideline index cannot be built
    /// (otherwise serve in degraded mode)
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cdss_server=info".parse()?)
                .add_directive("cdss_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let index = match GuidelineIndex::open(&args.guidelines) {
        Ok(index) => Some(Arc::new(index)),
        Err(e) if args.strict => {
            eprintln!("Error: {} (strict mode)", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(
                path = %args.guidelines.display(),
                "Guideline index unavailable, serving in degraded mode: {}",
                e
            );
            None
        }
    };

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let passages = index.as_deref().map_or(0, |idx| idx.len());
    let state = AppState {
        index,
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        guidelines = %args.guidelines.display(),
        passages,
        "cdss-server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
