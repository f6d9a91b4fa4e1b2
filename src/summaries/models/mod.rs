pub mod bar_chart;
pub mod pie_chart;
pub mod statistics;
