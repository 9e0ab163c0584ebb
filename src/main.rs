mod api_doc;
mod app;
mod config;
mod derived;
mod factory;
mod handlers;
mod logger;
mod messages;
mod models;
mod routes;
mod server;
mod state;
mod telemetry;
#[cfg(test)]
mod test_support;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config)?;

    tracing::info!("log-practice starting");
    config.log_startup();

    let app = app::build_router(AppState::new());
    server::serve(app, &config).await
}
