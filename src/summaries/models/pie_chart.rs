use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub static CATEGORIES: [&str; 3] = ["X category", "Y category", "Z category"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub id: u8,
    pub category_counts: BTreeMap<String, u32>,
}
