use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    app::{models::api_error::ApiError, structs::query_from_request::QueryFromRequest},
    AppState,
};

use super::{
    dtos::get_summary_dto::GetSummaryDto,
    models::{bar_chart::BarChart, pie_chart::PieChart, statistics::Statistics},
    service,
};

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetSummaryDto>,
) -> Result<Json<Statistics>, ApiError> {
    match service::get_statistics(&dto, &state).await {
        Ok(statistics) => Ok(Json(statistics)),
        Err(e) => Err(e),
    }
}

pub async fn get_bar_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetSummaryDto>,
) -> Result<Json<BarChart>, ApiError> {
    match service::get_bar_chart(&dto, &state).await {
        Ok(bar_chart) => Ok(Json(bar_chart)),
        Err(e) => Err(e),
    }
}

pub async fn get_pie_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetSummaryDto>,
) -> Result<Json<PieChart>, ApiError> {
    match service::get_pie_chart(&dto, &state).await {
        Ok(pie_chart) => Ok(Json(pie_chart)),
        Err(e) => Err(e),
    }
}
