use crate::{
    app::{models::api_error::ApiError, util::reqwest},
    AppState,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto, models::transaction::Transaction,
};

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    state: &AppState,
) -> Result<Vec<Transaction>, ApiError> {
    let transactions: Vec<Transaction> =
        reqwest::get_json(&state.client, state.envy.transactions_url()).await?;

    tracing::debug!("fetched {} transaction(s)", transactions.len());

    Ok(filter_transactions(transactions, dto))
}

pub fn filter_transactions(
    transactions: Vec<Transaction>,
    dto: &GetTransactionsFilterDto,
) -> Vec<Transaction> {
    let needle = dto.search.to_lowercase();

    transactions
        .into_iter()
        .filter(|transaction| transaction.matches(&needle))
        .skip(dto.offset())
        .take(dto.limit())
        .collect()
}
