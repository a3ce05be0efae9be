//! Core of the DAOstar gateway: resolves a network to its Aragon OSx
//! subgraph, queries it, and reshapes the result into the
//! [DAOstar](https://daostar.org/) DAO metadata schema.
//!
//! ## Usage
//!
//! ```
//! use daostar::{DaoMetadata, DaoRecord};
//!
//! let record = DaoRecord {
//!     id: "0x02bbc496bebc9a06c239670cea663c43cead899f".to_string(),
//!     dao_uri: None,
//!     metadata: "ipfs://QmVnx8YT4Leqkt6Dn6ErLWyQ8U6VRDKPopK95hTckrGHUB".to_string(),
//! };
//!
//! let dao = DaoMetadata::format(&record, "ethereum", &record.id);
//!
//! assert_eq!(
//!     dao.description,
//!     "https://ipfs.io/ipfs/QmVnx8YT4Leqkt6Dn6ErLWyQ8U6VRDKPopK95hTckrGHUB"
//! );
//! ```

use thiserror::Error;

pub mod metadata;
pub mod registry;
pub mod subgraph;

pub use metadata::{DaoMetadata, DaoRecord};
pub use registry::{NetworkRegistry, UnsupportedNetwork};
pub use subgraph::{SubgraphClient, SubgraphError};

/// The full query-and-format pipeline behind both gateway routes.
///
/// Owns the network registry and the subgraph client. Stateless across
/// requests, safe to share between handlers.
pub struct Gateway {
    registry: NetworkRegistry,
    subgraph: SubgraphClient,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    UnsupportedNetwork(#[from] UnsupportedNetwork),
    #[error("DAO not found")]
    DaoNotFound,
    #[error(transparent)]
    Upstream(#[from] SubgraphError),
}

impl Gateway {
    pub fn new(registry: NetworkRegistry) -> Result<Self, reqwest::Error> {
        Ok(Self {
            registry,
            subgraph: SubgraphClient::new()?,
        })
    }

    /// Fetch every DAO on `network`, formatted as DAOstar metadata.
    pub async fn list_daos(&self, network: &str) -> Result<Vec<DaoMetadata>, GatewayError> {
        let endpoint = self.registry.resolve(network)?;
        let records = self.subgraph.list_daos(endpoint).await?;

        Ok(records
            .iter()
            .map(|record| DaoMetadata::format(record, network, &record.id))
            .collect())
    }

    /// Fetch a single DAO by its chain address.
    ///
    /// The formatted `name` echoes `dao_id` as the caller wrote it, not the
    /// id reported by the subgraph.
    pub async fn get_dao(&self, network: &str, dao_id: &str) -> Result<DaoMetadata, GatewayError> {
        let endpoint = self.registry.resolve(network)?;

        match self.subgraph.get_dao(endpoint, dao_id).await? {
            Some(record) => Ok(DaoMetadata::format(&record, network, dao_id)),
            None => Err(GatewayError::DaoNotFound),
        }
    }
}
