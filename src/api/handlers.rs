use crate::{
    api::models::ApiState,
    core::models::{
        balance::{BalancesResponse, NetworkBalance},
        network::NetworkId,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;
use tracing::info;

// Define API routes
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/chains", get(get_chains))
        .route("/api", get(get_legacy_balances))
        .route("/api/{address}", get(get_balances))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/chains",
    responses(
        (status = 200, description = "Configured networks in registry order", body = Vec<NetworkId>)
    )
)]
async fn get_chains(State(state): State<Arc<ApiState>>) -> Json<Vec<NetworkId>> {
    Json(state.service.supported_networks())
}

#[utoipa::path(
    get,
    path = "/api/{address}",
    params(
        ("address" = String, Path, description = "Address to look up, used verbatim")
    ),
    responses(
        (status = 200, description = "Balance per configured network; failed networks carry error=true",
         body = std::collections::HashMap<String, NetworkBalance>)
    )
)]
async fn get_balances(State(state): State<Arc<ApiState>>, Path(address): Path<String>) -> Json<BalancesResponse> {
    info!(address = %address, "Balances requested");
    Json(state.service.aggregate_balances(&address).await)
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Balances of the configured legacy address",
         body = std::collections::HashMap<String, NetworkBalance>)
    )
)]
async fn get_legacy_balances(State(state): State<Arc<ApiState>>) -> Json<BalancesResponse> {
    Json(state.service.aggregate_balances(&state.legacy_address).await)
}
