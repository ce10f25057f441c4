use canvas_demo::{config, routes, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    tracing::info!(
        scratch_dir = %config.scratch_dir.display(),
        retention_secs = config.scratch_retention.as_secs(),
        saved_state = %config.saved_state_path.display(),
        assets_dir = %config.assets_dir.display(),
        "configuration loaded"
    );
    let port = config.port;

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "canvas-demo listening");
    axum::serve(listener, app).await.expect("server failed");
}
