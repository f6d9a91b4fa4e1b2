pub mod get_transactions_filter_dto;
