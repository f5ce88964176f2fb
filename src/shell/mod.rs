// Composition root for the leave_balances bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the record store and wire it into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
