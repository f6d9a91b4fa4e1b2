pub mod get_summary_dto;
