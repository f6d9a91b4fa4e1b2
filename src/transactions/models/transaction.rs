use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub title: String,
    pub description: String,
    // None only when the field is absent; an explicit null stays Some(Null)
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
    // id, category, image, sold, dateOfSale, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Transaction {
    /// Text the search runs against. Integral numbers have no fraction
    /// (`10`), floats use their shortest form (`329.85`), strings are verbatim,
    /// `null` is `"null"` and an absent price is `"undefined"`.
    ///
    /// Floats print positionally, so `1e21` is `"1000000000000000000000"`
    /// rather than `"1e+21"`.
    pub fn price_text(&self) -> String {
        match &self.price {
            None => "undefined".to_string(),
            Some(Value::String(price)) => price.to_string(),
            Some(Value::Number(price)) => match price.as_f64() {
                Some(float) if price.is_f64() => float.to_string(),
                _ => price.to_string(),
            },
            Some(price) => price.to_string(),
        }
    }

    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.price_text().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn transaction(price: Value) -> Transaction {
        serde_json::from_value(json!({
            "id": 7,
            "title": "Solid Gold Petite Micropave",
            "description": "Satisfaction Guaranteed.",
            "price": price,
            "category": "jewelery",
            "sold": false
        }))
        .unwrap()
    }

    #[test]
    fn price_text_drops_trailing_zero_fraction() {
        assert_eq!(transaction(json!(168.0)).price_text(), "168");
        assert_eq!(transaction(json!(168)).price_text(), "168");
        assert_eq!(transaction(json!(329.85)).price_text(), "329.85");
        assert_eq!(transaction(json!("12.50")).price_text(), "12.50");
    }

    #[test]
    fn matches_any_inspected_field() {
        let t = transaction(json!(329.85));

        assert!(t.matches("micropave"));
        assert!(t.matches("guaranteed"));
        assert!(t.matches("9.8"));
        assert!(t.matches(""));
        assert!(!t.matches("jewelery"));
    }

    #[test]
    fn passthrough_fields_survive_serialization() {
        let t = transaction(json!(9.99));
        let value = serde_json::to_value(&t).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["category"], json!("jewelery"));
        assert_eq!(value["sold"], json!(false));
        assert_eq!(value["price"], json!(9.99));
    }

    #[test]
    fn null_price_is_kept() {
        let input = json!({ "id": 1, "title": "a", "description": "b", "price": null });
        let t: Transaction = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(t.price_text(), "null");
        assert!(t.matches("null"));
        assert_eq!(serde_json::to_value(&t).unwrap(), input);
    }

    #[test]
    fn absent_price_stays_absent() {
        let input = json!({ "id": 1, "title": "a", "description": "b" });
        let t: Transaction = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(t.price_text(), "undefined");
        assert_eq!(serde_json::to_value(&t).unwrap(), input);
    }

    #[test]
    fn missing_title_is_rejected() {
        let result = serde_json::from_value::<Transaction>(json!({
            "description": "no title",
            "price": 1
        }));

        assert!(result.is_err());
    }
}
