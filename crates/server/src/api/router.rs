use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::create_customer, handlers::list_customers))
        .routes(routes!(
            handlers::get_customer,
            handlers::update_customer,
            handlers::delete_customer
        ))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
