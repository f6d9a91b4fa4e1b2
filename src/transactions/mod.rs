pub mod controller;
pub mod dtos;
pub mod models;
pub mod service;

pub static DEFAULT_PAGE: u32 = 1;
pub static DEFAULT_PER_PAGE: u32 = 60;
