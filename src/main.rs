use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::{
    app::env::Envy,
    summaries::sources::{metrics_source::MetricsSource, random::RandomMetricsSource},
};

mod app;
mod summaries;
mod transactions;

pub struct AppState {
    pub client: reqwest::Client,
    pub metrics: Arc<dyn MetricsSource>,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transactions_api=debug,tower_http=debug".into()),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(envy.upstream_timeout_secs()))
        .build()
    {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {:#?}", e),
    };

    tracing::info!("fetching transactions from {}", envy.transactions_url());

    let state = Arc::new(AppState {
        client,
        metrics: Arc::new(RandomMetricsSource),
        envy: Arc::new(envy),
    });

    // app
    let app = app::router::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
