use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::metadata::DaoRecord;

/// Query returning every DAO registered on a network.
pub const LIST_DAOS_QUERY: &str = "{ daos { id daoURI metadata } }";

/// Query returning a single DAO by id.
pub const GET_DAO_QUERY: &str =
    "query GetDAO($daoId: ID!) { dao(id: $daoId) { id daoURI metadata } }";

/// The upstream subgraphs have no SLA, so don't wait on them forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes GraphQL queries against Aragon OSx subgraph endpoints.
///
/// One outbound call per operation, no retries.
pub struct SubgraphClient {
    client: Client,
}

#[derive(Debug, Error)]
pub enum SubgraphError {
    #[error("Subgraph request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Subgraph returned status {0}")]
    Status(u16),
    #[error("Subgraph returned errors: {0}")]
    GraphQl(String),
    #[error("Subgraph response has no data")]
    MissingData,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DaoList {
    daos: Vec<DaoRecord>,
}

#[derive(Debug, Deserialize)]
struct SingleDao {
    #[serde(default)]
    dao: Option<DaoRecord>,
}

impl SubgraphClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Fetch every DAO registered at `endpoint`.
    ///
    /// A 2xx response without a DAO list fails loudly rather than turning
    /// into an empty result.
    pub async fn list_daos(&self, endpoint: &str) -> Result<Vec<DaoRecord>, SubgraphError> {
        let data: Option<DaoList> = self.execute(endpoint, LIST_DAOS_QUERY, None).await?;

        data.map(|list| list.daos).ok_or(SubgraphError::MissingData)
    }

    /// Fetch a single DAO by id.
    ///
    /// `Ok(None)` when the subgraph has no DAO under this id.
    pub async fn get_dao(
        &self,
        endpoint: &str,
        dao_id: &str,
    ) -> Result<Option<DaoRecord>, SubgraphError> {
        let variables = json!({ "daoId": dao_id });
        let data: Option<SingleDao> = self
            .execute(endpoint, GET_DAO_QUERY, Some(variables))
            .await?;

        Ok(data.and_then(|single| single.dao))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<Option<T>, SubgraphError> {
        debug!("Posting query to {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubgraphError::Status(status.as_u16()));
        }

        let body = response.json::<GraphQlResponse<T>>().await?;

        if !body.errors.is_empty() {
            let detail = body
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SubgraphError::GraphQl(detail));
        }

        Ok(body.data)
    }
}
