//! Load stage: clean artifacts into the SQLite store.

use tracing::info;

use crate::{
    census::Dataset,
    core::{read_table, ArtifactKind, Config},
    error::Stage,
    storage::{BdsDatabase, LoadReport},
    transform::FinalTables,
    Result,
};

/// Replace the store's tables with the clean artifacts and verify them.
pub fn handle_load(config: &Config) -> Result<LoadReport> {
    load_artifacts(config).map_err(|e| e.in_stage(Stage::Load))
}

fn load_artifacts(config: &Config) -> Result<LoadReport> {
    let clean = |dataset| {
        read_table(
            &config.clean_path(dataset),
            ArtifactKind::Clean,
            Stage::Transform,
        )
    };
    let tables = FinalTables {
        national: clean(Dataset::National)?,
        by_firm_age: clean(Dataset::ByFirmAge)?,
        by_state: clean(Dataset::ByState)?,
    };

    let mut db = BdsDatabase::open(&config.db_path)?;
    println!("Connected to database: {}", config.db_path.display());

    let report = db.load_all(&tables)?;
    for table in &report.tables {
        println!(
            "Verified: {} has {} rows (indexes: {})",
            table.dataset,
            table.rows,
            table.indexes.join(", ")
        );
    }

    info!(path = %config.db_path.display(), "load complete");
    Ok(report)
}
