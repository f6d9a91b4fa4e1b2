use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub id: u8,
    pub total_sale_amount: u32,
    pub total_sold_items: u32,
    pub total_not_sold_items: u32,
}
