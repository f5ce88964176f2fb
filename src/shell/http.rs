use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::leave_balances::use_cases::calculate_leave_balance::inbound::http as balance_http;
use crate::modules::leave_balances::use_cases::cancel_leave::inbound::http as cancel_http;
use crate::modules::leave_balances::use_cases::request_leave::inbound::http as request_http;
use crate::modules::leave_balances::use_cases::set_leave_allocation::inbound::http as allocation_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/leave-balance", get(balance_http::handle))
        .route("/request-leave", post(request_http::handle))
        .route("/cancel-leave", post(cancel_http::handle))
        .route("/set-leave-allocation", post(allocation_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
