//! Full pipeline: extract, transform and load in strict sequence.

use tracing::info;

use super::{extract::handle_extract, load::handle_load, transform::handle_transform};
use crate::{core::Config, storage::LoadReport, Result};

const RULE: &str = "============================================================";

/// Run all three stages. Each stage reads the previous stage's artifacts, so
/// any stage can also be re-run alone afterwards.
pub async fn handle_run(config: &Config) -> Result<LoadReport> {
    println!("\n{RULE}");
    println!("CENSUS BDS DATA PIPELINE");
    println!("{RULE}\n");

    println!("\n[STEP 1/3] EXTRACTION\n");
    handle_extract(config).await?;

    println!("\n[STEP 2/3] TRANSFORMATION\n");
    let join = handle_transform(config)?;

    println!("\n[STEP 3/3] LOADING\n");
    let report = handle_load(config)?;

    println!("\n{RULE}");
    println!("PIPELINE COMPLETE!");
    println!("{RULE}\n");

    info!(
        rows = report.total_rows(),
        births_matched = join.matched,
        "pipeline finished"
    );
    Ok(report)
}
