//! DAOstar gateway HTTP server, using [axum](https://github.com/tokio-rs/axum).
//!
//! Proxies GraphQL queries to the Aragon OSx subgraphs and re-exposes the
//! results as DAOstar metadata JSON:
//!
//! - `GET /fetch_aragon_daos/:network` — every DAO on a network
//! - `GET /aragon_dao/:network/:dao_id` — a single DAO by chain address
//! - `GET /` — HTML documentation
//!
//! Upstream failures are mapped to HTTP-level status codes rather than
//! wrapped reply objects: a bad network is a 400, a missing DAO a 404, and a
//! subgraph error passes its status through.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use daostar::{DaoMetadata, Gateway, GatewayError, SubgraphError};
use serde_json::json;
use tracing::warn;

mod docs;

const UPSTREAM_FAILED: &str = "Failed to fetch data from Aragon API";
const MISSING_PARAMS: &str = "Network and DAO ID parameters are required";

pub fn create_router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/", get(documentation))
        .route("/fetch_aragon_daos/:network", get(list_daos))
        .route("/aragon_dao/:network/:dao_id", get(get_dao))
        .with_state(gateway)
}

async fn documentation() -> Html<&'static str> {
    Html(docs::PAGE)
}

async fn list_daos(
    Path(network): Path<String>,
    State(gateway): State<Arc<Gateway>>,
) -> Result<Json<Vec<DaoMetadata>>, ErrorBody> {
    let daos = gateway.list_daos(&network).await?;
    Ok(Json(daos))
}

async fn get_dao(
    Path((network, dao_id)): Path<(String, String)>,
    State(gateway): State<Arc<Gateway>>,
) -> Result<Json<DaoMetadata>, ErrorBody> {
    // The router cannot match an empty segment, but a percent-encoded or
    // whitespace-only one still arrives here.
    if network.trim().is_empty() || dao_id.trim().is_empty() {
        return Err(ErrorBody {
            status: StatusCode::BAD_REQUEST,
            message: MISSING_PARAMS.to_string(),
        });
    }

    let dao = gateway.get_dao(&network, &dao_id).await?;
    Ok(Json(dao))
}

/// A JSON `{"error": ...}` body and the status it is served under.
struct ErrorBody {
    status: StatusCode,
    message: String,
}

impl From<GatewayError> for ErrorBody {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::UnsupportedNetwork(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            GatewayError::DaoNotFound => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            GatewayError::Upstream(upstream) => {
                warn!("Subgraph query failed: {}", upstream);

                // A non-2xx upstream status passes through; everything else
                // (transport, bad JSON, GraphQL-level errors) is a 502.
                let status = match upstream {
                    SubgraphError::Status(code) => {
                        StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    _ => StatusCode::BAD_GATEWAY,
                };

                Self {
                    status,
                    message: UPSTREAM_FAILED.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
