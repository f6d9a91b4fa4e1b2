use serde::Deserialize;
use validator::Validate;

use crate::transactions::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[derive(Debug, Deserialize, Validate)]
pub struct GetTransactionsFilterDto {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be 1 or greater."))]
    pub page: u32,
    #[serde(default = "default_per_page", rename = "perPage")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for GetTransactionsFilterDto {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl GetTransactionsFilterDto {
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit())
    }

    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}
