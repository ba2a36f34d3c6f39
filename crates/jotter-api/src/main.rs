//! jotter-api: HTTP server binary for jotter.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jotter_api::{app, AppState};
use jotter_core::defaults;
use jotter_db::Database;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: "jotter_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jotter_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("jotter-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            } else {
                layer = layer.with_ansi(false); // no ANSI in files
            }
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        // Console-only output
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Get configuration from environment
    let base_dir = PathBuf::from(env_or(defaults::ENV_BASE_DIR, defaults::DEFAULT_BASE_DIR));
    let database_url = std::env::var(defaults::ENV_DATABASE_URL).unwrap_or_else(|_| {
        format!(
            "sqlite:{}",
            base_dir.join(defaults::DEFAULT_DATABASE_FILE).display()
        )
    });
    let upload_dir = std::env::var(defaults::ENV_UPLOAD_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| base_dir.join(defaults::DEFAULT_UPLOAD_DIR));
    let host = env_or(defaults::ENV_HOST, defaults::DEFAULT_HOST);
    let port: u16 = std::env::var(defaults::ENV_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults::DEFAULT_PORT);

    // The upload directory is created if absent
    std::fs::create_dir_all(&upload_dir)?;
    info!("Upload directory ready at {}", upload_dir.display());

    // Connect to database and bootstrap the schema
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    db.init_schema().await?;
    info!("Database ready");

    let state = AppState { db, upload_dir };
    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
