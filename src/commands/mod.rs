//! Command implementations for the BDS pipeline CLI

pub mod extract;
pub mod load;
pub mod pipeline;
pub mod query;
pub mod transform;

pub use extract::handle_extract;
pub use load::handle_load;
pub use pipeline::handle_run;
pub use query::{handle_query, run_query, QueryOutcome, QueryParams};
pub use transform::handle_transform;
