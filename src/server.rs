//! # Server
//!
//! HTTP adapter over a shared [`Coordinator`]. Handlers only extract path
//! parameters and the peer address, call the coordinator and serialize the
//! result; all pool semantics live in [`crate::pool`].
//!
//! | Route                          | Response                                   |
//! |--------------------------------|--------------------------------------------|
//! | `GET /random`                  | `{chromosome, fitness}` or 404             |
//! | `PUT /one/:chromosome/:fitness`| `{length, chromosome, updated}` / `{length: 0}` |
//! | `GET /chromosomes`             | `{encoding: fitness, ...}`                 |
//! | `GET /IPs`                     | `{address: 1, ...}`                        |
//! | `GET /seq_number`              | `{number}`                                 |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::{
    error::{PoolError, Result},
    pool::{ChromosomeEntry, ContributorList, Coordinator, PopulationDump, SubmitOutcome},
};

/// Key of the not-found body returned by `GET /random` on an empty pool.
pub const NO_CHROMOSOMES: &str = "No chromosomes";

type SharedPool = Arc<Coordinator>;

/// Body of `PUT /one/...`. `chromosome` and `updated` are omitted after a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<bool>,
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Stored {
                length,
                chromosome,
                updated,
            } => Self {
                length,
                chromosome: Some(chromosome),
                updated: Some(updated),
            },
            SubmitOutcome::Solved { .. } => Self {
                length: 0,
                chromosome: None,
                updated: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceNumber {
    pub number: u64,
}

impl IntoResponse for PoolError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        if !self.is_client_error() {
            error!(error = %message, "request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response();
        }

        match self {
            PoolError::EmptyPopulation => {
                let mut body = serde_json::Map::new();
                body.insert(NO_CHROMOSOMES.to_string(), message.into());
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            _ => (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response(),
        }
    }
}

/// Builds the router serving `pool`.
pub fn router(pool: SharedPool) -> Router {
    Router::new()
        .route("/random", get(random))
        .route("/one/:chromosome/:fitness", put(submit))
        .route("/chromosomes", get(chromosomes))
        .route("/IPs", get(contributors))
        .route("/seq_number", get(seq_number))
        .with_state(pool)
}

/// Serves `pool` on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, pool: SharedPool) -> Result<()> {
    match listener.local_addr() {
        Ok(addr) => info!(%addr, "chromosome pool listening"),
        Err(e) => warn!(error = %e, "could not read the listening address"),
    }
    axum::serve(
        listener,
        router(pool).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

async fn random(State(pool): State<SharedPool>) -> Result<Json<ChromosomeEntry>> {
    pool.sample_random().map(Json)
}

async fn submit(
    State(pool): State<SharedPool>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Path((chromosome, fitness)): Path<(String, String)>,
) -> Result<Json<SubmitResponse>> {
    let address = peer.ip().to_string();
    match pool.submit_raw(&chromosome, &fitness, &address) {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => {
            warn!(%address, %chromosome, %fitness, error = %e, "submission rejected");
            Err(e)
        }
    }
}

async fn chromosomes(State(pool): State<SharedPool>) -> Json<PopulationDump> {
    Json(pool.dump_all())
}

async fn contributors(State(pool): State<SharedPool>) -> Json<ContributorList> {
    Json(pool.contributors())
}

async fn seq_number(State(pool): State<SharedPool>) -> Json<SequenceNumber> {
    Json(SequenceNumber {
        number: pool.epoch(),
    })
}
