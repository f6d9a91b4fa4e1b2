use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::get_summary_dto::GetSummaryDto,
    errors::SummariesApiError,
    models::{bar_chart::BarChart, pie_chart::PieChart, statistics::Statistics},
    util::month::month_id,
};

fn resolve_month(dto: &GetSummaryDto) -> Result<u8, ApiError> {
    let Some(month) = &dto.month else {
        return Err(SummariesApiError::InvalidMonth.value());
    };

    match month_id(month) {
        Some(id) => Ok(id),
        None => {
            tracing::debug!("unresolvable month: {}", month);
            Err(SummariesApiError::InvalidMonth.value())
        }
    }
}

pub async fn get_statistics(
    dto: &GetSummaryDto,
    state: &AppState,
) -> Result<Statistics, ApiError> {
    let month = resolve_month(dto)?;

    state.metrics.statistics(month).await
}

pub async fn get_bar_chart(dto: &GetSummaryDto, state: &AppState) -> Result<BarChart, ApiError> {
    let month = resolve_month(dto)?;

    state.metrics.bar_chart(month).await
}

pub async fn get_pie_chart(dto: &GetSummaryDto, state: &AppState) -> Result<PieChart, ApiError> {
    let month = resolve_month(dto)?;

    state.metrics.pie_chart(month).await
}
