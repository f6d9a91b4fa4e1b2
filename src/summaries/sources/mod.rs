pub mod metrics_source;
pub mod random;
