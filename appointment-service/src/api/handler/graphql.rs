use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{FromRequest, Request, State},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
};

use crate::api::graphql::AppointmentSchema;

#[derive(Clone)]
pub struct GraphqlState {
    pub schema: AppointmentSchema,
    /// Path the GraphiQL page posts queries to.
    pub endpoint: String,
    pub graphiql: bool,
}

#[tracing::instrument(skip_all)]
pub async fn execute(State(state): State<GraphqlState>, req: GraphQLRequest) -> GraphQLResponse {
    let response = state.schema.execute(req.into_inner()).await;

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request finished with errors");
    }

    response.into()
}

/// GET on the endpoint: GraphiQL for browsers, otherwise runs `?query=`.
pub async fn execute_get(State(state): State<GraphqlState>, request: Request) -> Response {
    if state.graphiql && wants_graphiql(request.uri().query(), request.headers()) {
        return graphiql(&state.endpoint).into_response();
    }

    match <GraphQLRequest as FromRequest<GraphqlState>>::from_request(request, &state).await {
        Ok(req) => execute(State(state), req).await.into_response(),
        Err(rejection) => {
            tracing::warn!(error = %rejection.0, "Rejected GET GraphQL request");
            rejection.into_response()
        }
    }
}

fn wants_graphiql(query: Option<&str>, headers: &HeaderMap) -> bool {
    let has_query = query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair.split('=').next() == Some("query"))
    });
    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"));

    !has_query || accepts_html
}

fn graphiql(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}
