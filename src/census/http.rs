//! HTTP access to the Census BDS timeseries API

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use tracing::{debug, info};

use crate::census::types::{payload_to_table, Dataset};
use crate::core::table::Table;
use crate::error::{BdsError, Result};

#[cfg(test)]
mod tests;

/// Shared client with JSON accept headers.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(Client::builder().default_headers(headers).build()?)
}

/// Query parameters for one dataset shape: all years, one geography.
pub fn query_params(dataset: Dataset, api_key: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("get", dataset.get_param()),
        ("for", dataset.geography().to_string()),
        ("YEAR", "*".to_string()),
    ];
    if let Some(key) = api_key {
        params.push(("key", key.to_string()));
    }
    params
}

/// Fetch one dataset shape as a header-keyed text table.
///
/// Any non-success status or a payload that is not a rectangular array of
/// string rows fails the whole dataset; nothing is retried here.
pub async fn fetch_dataset(
    client: &Client,
    base_url: &str,
    dataset: Dataset,
    api_key: Option<&str>,
) -> Result<Table> {
    info!(%dataset, url = base_url, "fetching dataset");

    let res = client
        .get(base_url)
        .query(&query_params(dataset, api_key))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(BdsError::ApiStatus {
            dataset,
            status: status.as_u16(),
        });
    }

    let body = res.text().await?;
    let payload: Vec<Vec<Option<String>>> =
        serde_json::from_str(&body).map_err(|e| BdsError::MalformedPayload {
            dataset,
            reason: e.to_string(),
        })?;

    let table = payload_to_table(dataset, payload)?;
    debug!(%dataset, columns = ?table.columns(), "decoded payload");
    info!(%dataset, rows = table.len(), "retrieved rows");

    Ok(table)
}
