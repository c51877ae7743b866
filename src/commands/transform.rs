//! Transform stage: raw artifacts in, clean artifacts out.

use tracing::info;

use crate::{
    census::Dataset,
    core::{read_table, write_tables, ArtifactKind, Config},
    error::Stage,
    transform::{transform_all, BirthJoinReport, FinalTables},
    Result,
};

/// Read the raw artifacts, clean and enrich them, and write the clean ones.
pub fn handle_transform(config: &Config) -> Result<BirthJoinReport> {
    transform_artifacts(config).map_err(|e| e.in_stage(Stage::Transform))
}

fn transform_artifacts(config: &Config) -> Result<BirthJoinReport> {
    let raw = |dataset| read_table(&config.raw_path(dataset), ArtifactKind::Raw, Stage::Extract);

    let raw_firm_age = raw(Dataset::ByFirmAge)?;
    let raw_national = raw(Dataset::National)?;
    let raw_state = raw(Dataset::ByState)?;

    let (tables, report) = transform_all(&raw_national, &raw_firm_age, &raw_state);

    let FinalTables {
        national,
        by_firm_age,
        by_state,
    } = tables;
    let clean = [
        (config.clean_path(Dataset::National), national),
        (config.clean_path(Dataset::ByFirmAge), by_firm_age),
        (config.clean_path(Dataset::ByState), by_state),
    ];
    write_tables(&clean)?;
    for (dataset, (path, table)) in Dataset::ALL.iter().zip(&clean) {
        println!("Saved {} clean rows of {dataset} data to {}", table.len(), path.display());
    }

    info!(
        births_matched = report.matched,
        duplicate_birth_years = report.duplicate_years.len(),
        "transformation complete"
    );
    Ok(report)
}
