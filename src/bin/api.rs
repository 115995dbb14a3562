use anyhow::Result;
use menu_nutrition::{api, app_state::AppState, config::Config, service::NutritionService};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let service = NutritionService::from_config(&config)?;
    let app = api::router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "nutrition api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
