// handlers/mod.rs - one module per resource plus the auth endpoints.
//
// None of these handlers check credentials themselves. Resource writes are
// gated in the router (see `server::app`) when REQUIRE_AUTH_FOR_WRITES is set.

pub mod athletes;
pub mod auth;
pub mod meets;
pub mod payload;
pub mod pipeline;
pub mod results;
pub mod system;
