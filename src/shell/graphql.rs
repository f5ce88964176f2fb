use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

pub use crate::modules::leave_balances::use_cases::calculate_leave_balance::inbound::graphql::QueryRoot;
use crate::modules::leave_balances::use_cases::cancel_leave::inbound::graphql::CancelLeaveMutation;
use crate::modules::leave_balances::use_cases::request_leave::inbound::graphql::RequestLeaveMutation;
use crate::modules::leave_balances::use_cases::set_leave_allocation::inbound::graphql::SetLeaveAllocationMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RequestLeaveMutation,
    CancelLeaveMutation,
    SetLeaveAllocationMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
