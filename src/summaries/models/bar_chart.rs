use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub static PRICE_RANGES: [&str; 10] = [
    "0 - 100",
    "101 - 200",
    "201 - 300",
    "301 - 400",
    "401 - 500",
    "501 - 600",
    "601 - 700",
    "701 - 800",
    "801 - 900",
    "901 - above",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub id: u8,
    pub price_ranges: BTreeMap<String, u32>,
}
