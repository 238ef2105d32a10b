use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use doctorcare_backend::config::Config;
use doctorcare_backend::routes;
use doctorcare_backend::services::user_store::UserStore;
use doctorcare_backend::state::AppState;

const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let users = UserStore::new(&config.user_store_path);
    users.load().await?;

    let state = Arc::new(AppState::new(
        SESSION_TTL,
        users,
        config.reply_delay,
        config.admin_key.clone(),
    ));

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("doctorcare backend listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
