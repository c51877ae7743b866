//! Extract stage: fetch every dataset shape and persist it verbatim.

use tracing::info;

use crate::{
    census::{build_client, fetch_dataset, Dataset},
    core::{write_tables, Config},
    error::Stage,
    Result,
};

/// Fetch the three dataset shapes and write `raw_<dataset>.csv` for each.
///
/// The first failing shape aborts the stage before any raw artifact is
/// replaced, so the raw files on disk always come from one extraction run.
pub async fn handle_extract(config: &Config) -> Result<()> {
    extract_all(config).await.map_err(|e| e.in_stage(Stage::Extract))
}

async fn extract_all(config: &Config) -> Result<()> {
    let client = build_client()?;

    let mut fetched = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        let table = fetch_dataset(
            &client,
            &config.api_base_url,
            dataset,
            config.api_key.as_deref(),
        )
        .await?;
        fetched.push((config.raw_path(dataset), table));
    }

    write_tables(&fetched)?;
    for (dataset, (path, table)) in Dataset::ALL.iter().zip(&fetched) {
        println!("Saved {} rows of {dataset} data to {}", table.len(), path.display());
    }

    info!("extraction complete");
    Ok(())
}
