use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{summaries, transactions, AppState};

use super::errors::DefaultApiError;

pub fn create_router(state: Arc<AppState>) -> Router {
    let rate_limit = state.envy.rate_limit_per_sec();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET]);

    Router::new()
        // transactions
        .route("/transactions", get(transactions::controller::get_transactions))
        // summaries
        .route("/statistics", get(summaries::controller::get_statistics))
        .route("/bar-chart", get(summaries::controller::get_bar_chart))
        .route("/pie-chart", get(summaries::controller::get_pie_chart))
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err, "middleware failure");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
        .with_state(state)
}
