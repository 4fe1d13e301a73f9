use utoipa::OpenApi;

use crate::core::models::{balance::NetworkBalance, network::NetworkId};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::get_chains,
        super::handlers::get_balances,
        super::handlers::get_legacy_balances
    ),
    components(schemas(NetworkId, NetworkBalance)),
    info(
        title = "Omnigas API",
        description = "Native balances of one address across the configured networks",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
