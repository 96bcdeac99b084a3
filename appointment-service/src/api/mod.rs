pub mod graphql;
pub mod handler;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServiceConfig;
use handler::{graphql as graphql_handler, health};
use state::AppointmentAppState;

/// Builds the HTTP router: the GraphQL endpoint plus the health check.
pub fn router(state: Arc<AppointmentAppState>, config: &ServiceConfig) -> Router {
    let schema = graphql::build_schema(state);

    Router::new()
        .route("/headpat", get(health::headpat))
        .route(
            &config.graphql_path,
            get(graphql_handler::execute_get).post(graphql_handler::execute),
        )
        // tracing log (turn request into info level)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        )
        .with_state(graphql_handler::GraphqlState {
            schema,
            endpoint: config.graphql_path.clone(),
            graphiql: config.graphiql,
        })
}
