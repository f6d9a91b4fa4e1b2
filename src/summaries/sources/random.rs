use async_trait::async_trait;
use rand::Rng;

use crate::{
    app::models::api_error::ApiError,
    summaries::models::{
        bar_chart::{BarChart, PRICE_RANGES},
        pie_chart::{PieChart, CATEGORIES},
        statistics::Statistics,
    },
};

use super::metrics_source::MetricsSource;

pub static STATISTICS_MAX: u32 = 100;
pub static BAR_CHART_MAX: u32 = 50;
pub static PIE_CHART_MAX: u32 = 30;

/// Placeholder numbers, uniform in fixed ranges. Ignores the month apart
/// from echoing it back as the id.
pub struct RandomMetricsSource;

#[async_trait]
impl MetricsSource for RandomMetricsSource {
    async fn statistics(&self, month: u8) -> Result<Statistics, ApiError> {
        Ok(random_statistics(month, &mut rand::thread_rng()))
    }

    async fn bar_chart(&self, month: u8) -> Result<BarChart, ApiError> {
        Ok(random_bar_chart(month, &mut rand::thread_rng()))
    }

    async fn pie_chart(&self, month: u8) -> Result<PieChart, ApiError> {
        Ok(random_pie_chart(month, &mut rand::thread_rng()))
    }
}

pub fn random_statistics<R: Rng>(month: u8, rng: &mut R) -> Statistics {
    Statistics {
        id: month,
        total_sale_amount: rng.gen_range(1..=STATISTICS_MAX) * 1000,
        total_sold_items: rng.gen_range(1..=STATISTICS_MAX) * 10,
        total_not_sold_items: rng.gen_range(1..=STATISTICS_MAX) * 5,
    }
}

pub fn random_bar_chart<R: Rng>(month: u8, rng: &mut R) -> BarChart {
    BarChart {
        id: month,
        price_ranges: PRICE_RANGES
            .iter()
            .map(|label| (label.to_string(), rng.gen_range(1..=BAR_CHART_MAX)))
            .collect(),
    }
}

pub fn random_pie_chart<R: Rng>(month: u8, rng: &mut R) -> PieChart {
    PieChart {
        id: month,
        category_counts: CATEGORIES
            .iter()
            .map(|label| (label.to_string(), rng.gen_range(1..=PIE_CHART_MAX)))
            .collect(),
    }
}
