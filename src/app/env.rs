use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 5000;
pub static DEFAULT_TRANSACTIONS_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
pub static DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub static DEFAULT_RATE_LIMIT_PER_SEC: u64 = 50;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub transactions_url: Option<String>,
    pub upstream_timeout_secs: Option<u64>,

    pub rate_limit_per_sec: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn transactions_url(&self) -> &str {
        self.transactions_url
            .as_deref()
            .unwrap_or(DEFAULT_TRANSACTIONS_URL)
    }

    pub fn upstream_timeout_secs(&self) -> u64 {
        self.upstream_timeout_secs
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS)
    }

    // zero would stall every request behind the limiter
    pub fn rate_limit_per_sec(&self) -> u64 {
        self.rate_limit_per_sec
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_SEC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let envy = Envy::default();

        assert_eq!(envy.port(), 5000);
        assert_eq!(envy.transactions_url(), DEFAULT_TRANSACTIONS_URL);
        assert_eq!(envy.upstream_timeout_secs(), 10);
        assert_eq!(envy.rate_limit_per_sec(), 50);
    }

    #[test]
    fn reads_values_from_env_pairs() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            (
                "TRANSACTIONS_URL".to_string(),
                "http://localhost:9000/data.json".to_string(),
            ),
            ("UPSTREAM_TIMEOUT_SECS".to_string(), "3".to_string()),
            ("RATE_LIMIT_PER_SEC".to_string(), "0".to_string()),
        ];
        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.transactions_url(), "http://localhost:9000/data.json");
        assert_eq!(envy.upstream_timeout_secs(), 3);
        assert_eq!(envy.rate_limit_per_sec(), 50);
    }
}
