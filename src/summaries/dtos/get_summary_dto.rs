use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetSummaryDto {
    pub month: Option<String>,
}
