use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::query_from_request::QueryFromRequest},
    AppState,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
    models::transaction::Transaction, service,
};

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::get_transactions(&dto, &state).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}
