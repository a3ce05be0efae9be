use serde::{Deserialize, Serialize};

/// JSON-LD context of the DAOstar schemas.
pub const DAOSTAR_CONTEXT: &str = "http://www.daostar.org/schemas";

/// Public IPFS gateway used for metadata links.
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Route the Aragon App serves DAO pages under.
const APP_DAOS_ROOT: &str = "https://app.aragon.org/#/daos";

/// A DAO as returned by the Aragon OSx subgraph.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct DaoRecord {
    pub id: String,
    #[serde(rename = "daoURI")]
    pub dao_uri: Option<String>,
    /// Either an `ipfs://<cid>` URI or a bare CID.
    pub metadata: String,
}

/// A DAO in the shape of the DAOstar metadata schema.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct DaoMetadata {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "membersURI")]
    pub members_uri: String,
    #[serde(rename = "proposalsURI")]
    pub proposals_uri: String,
    #[serde(rename = "activityLogURI")]
    pub activity_log_uri: String,
    #[serde(rename = "contractsRegistryURI")]
    pub contracts_registry_uri: String,
}

impl DaoMetadata {
    /// Format a subgraph record for `network`.
    ///
    /// `display_id` is the id presented to clients. The list route passes the
    /// record's own id; the single-DAO route passes the caller's path
    /// parameter verbatim, even when its casing differs from the record's.
    pub fn format(record: &DaoRecord, network: &str, display_id: &str) -> Self {
        let cid = strip_ipfs_scheme(&record.metadata);
        let dao_url = format!("{}/{}/{}", APP_DAOS_ROOT, network, display_id);

        Self {
            context: DAOSTAR_CONTEXT.to_string(),
            kind: "DAO".to_string(),
            name: display_id.to_string(),
            description: format!("{}{}", IPFS_GATEWAY, cid),
            members_uri: format!("{}/community", dao_url),
            proposals_uri: format!("{}/governance", dao_url),
            activity_log_uri: format!("{}/dashboard", dao_url),
            contracts_registry_uri: format!("{}/settings", dao_url),
        }
    }
}

/// Strip the exact `ipfs://` scheme, if present.
///
/// Anything else passes through unchanged, malformed or not.
fn strip_ipfs_scheme(metadata: &str) -> &str {
    metadata.strip_prefix("ipfs://").unwrap_or(metadata)
}
