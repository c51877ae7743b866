//! Read-only view of the loaded store.

use crate::{
    census::Dataset,
    cli::types::YearRange,
    core::{Config, Table},
    storage::BdsDatabase,
};

/// Parameters for the query command
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub dataset: Dataset,
    pub range: YearRange,
    /// FAGE or state code, depending on the dataset.
    pub code: Option<i64>,
    pub as_json: bool,
}

/// What a query produced.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Rows(Table),
    /// The store does not exist yet.
    NotLoaded,
}

/// Select rows from the store. A missing store is a normal outcome here, not
/// an error: the caller tells the user to run the pipeline.
pub fn run_query(config: &Config, params: &QueryParams) -> anyhow::Result<QueryOutcome> {
    let db = match BdsDatabase::open_existing(&config.db_path) {
        Ok(db) => db,
        Err(e) if e.is_store_missing() => return Ok(QueryOutcome::NotLoaded),
        Err(e) => return Err(e.into()),
    };
    let table = db.select(params.dataset, params.range, params.code)?;
    Ok(QueryOutcome::Rows(table))
}

/// Run a query and print it as text lines or JSON.
pub fn handle_query(config: &Config, params: QueryParams) -> anyhow::Result<()> {
    match run_query(config, &params)? {
        QueryOutcome::NotLoaded => {
            println!("The pipeline has not been run yet: no data at {}", config.db_path.display());
            println!("Run `bds-pipeline run` first.");
        }
        QueryOutcome::Rows(table) => {
            if params.as_json {
                println!("{}", serde_json::to_string_pretty(&table.to_json_rows())?);
            } else {
                println!("{}", render_text(&table));
            }
        }
    }
    Ok(())
}

/// Format a table as the text output of `query`.
pub fn render_text(table: &Table) -> String {
    let mut out = table.columns().join("\t");
    for row in table.rows() {
        out.push('\n');
        out.push_str(&row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("\t"));
    }
    out.push_str(&format!("\n({} rows)", table.len()));
    out
}
