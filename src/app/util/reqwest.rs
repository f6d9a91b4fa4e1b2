use serde::de::DeserializeOwned;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, ApiError> {
    let res = match client.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e, "failed to get url response");
            return Err(DefaultApiError::UpstreamFetchFailed.value());
        }
    };

    let res = match res.error_for_status() {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e, "upstream responded with an error status");
            return Err(DefaultApiError::UpstreamFetchFailed.value());
        }
    };

    match res.json::<T>().await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(%e, "failed to deserialize upstream response");
            Err(DefaultApiError::UpstreamFetchFailed.value())
        }
    }
}
