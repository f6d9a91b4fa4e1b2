use async_trait::async_trait;

use crate::{
    app::models::api_error::ApiError,
    summaries::models::{bar_chart::BarChart, pie_chart::PieChart, statistics::Statistics},
};

/// Produces the month-keyed summaries served by the chart endpoints.
///
/// `month` is always a resolved 1-based month number.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn statistics(&self, month: u8) -> Result<Statistics, ApiError>;

    async fn bar_chart(&self, month: u8) -> Result<BarChart, ApiError>;

    async fn pie_chart(&self, month: u8) -> Result<PieChart, ApiError>;
}
