use std::collections::HashMap;

use thiserror::Error;

/// The production Aragon OSx subgraph deployments.
const ARAGON_OSX_ENDPOINTS: [(&str, &str); 9] = [
    (
        "arbitrum",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-arbitrum/version/v1.4.0/api",
    ),
    (
        "arbitrum-goerli",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-arbitrumGoerli/version/v1.4.0/api",
    ),
    (
        "base",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-baseMainnet/version/v1.4.0/api",
    ),
    (
        "base-goerli",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-baseGoerli/version/v1.4.0/api",
    ),
    (
        "ethereum",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-mainnet/version/v1.4.0/api",
    ),
    (
        "goerli",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-goerli/version/v1.4.0/api",
    ),
    (
        "mumbai",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-mumbai/version/v1.4.0/api",
    ),
    (
        "polygon",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-polygon/version/v1.4.0/api",
    ),
    (
        "sepolia",
        "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-sepolia/version/v1.4.0/api",
    ),
];

/// Immutable map from network identifier to subgraph endpoint URL.
///
/// Built once at startup and shared into request handlers. Lookup is
/// exact-string and case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct NetworkRegistry {
    endpoints: HashMap<String, String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Network '{network}' not supported")]
pub struct UnsupportedNetwork {
    pub network: String,
}

impl NetworkRegistry {
    /// Registry over the production Aragon OSx networks.
    pub fn aragon_osx() -> Self {
        Self::from_endpoints(
            ARAGON_OSX_ENDPOINTS
                .iter()
                .map(|(network, endpoint)| (network.to_string(), endpoint.to_string())),
        )
    }

    /// Registry over arbitrary `(network, endpoint)` pairs.
    pub fn from_endpoints<I>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            endpoints: endpoints.into_iter().collect(),
        }
    }

    /// Resolve a network identifier to its subgraph endpoint URL.
    pub fn resolve(&self, network: &str) -> Result<&str, UnsupportedNetwork> {
        self.endpoints
            .get(network)
            .map(String::as_str)
            .ok_or_else(|| UnsupportedNetwork {
                network: network.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_network() {
        let registry = NetworkRegistry::aragon_osx();

        assert_eq!(
            registry.resolve("ethereum").unwrap(),
            "https://subgraph.satsuma-prod.com/qHR2wGfc5RLi6/aragon/osx-mainnet/version/v1.4.0/api"
        );
    }

    #[test]
    fn test_resolve_unknown_network() {
        let registry = NetworkRegistry::aragon_osx();

        let err = registry.resolve("optimism").unwrap_err();
        assert_eq!(err.network, "optimism");
        assert_eq!(err.to_string(), "Network 'optimism' not supported");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = NetworkRegistry::aragon_osx();

        assert!(registry.resolve("Ethereum").is_err());
    }

    #[test]
    fn test_from_endpoints() {
        let registry = NetworkRegistry::from_endpoints([(
            "ethereum".to_string(),
            "http://localhost:3000".to_string(),
        )]);

        assert_eq!(registry.resolve("ethereum").unwrap(), "http://localhost:3000");
        assert!(registry.resolve("polygon").is_err());
    }
}
