pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod sources;
pub mod util;
