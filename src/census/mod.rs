//! Census Bureau Business Dynamics Statistics API

pub mod http;
pub mod types;

pub use http::{build_client, fetch_dataset};
pub use types::Dataset;
