//! Admin session endpoints under /api/auth.
//!
//! The only credential is the shared admin password. A successful login
//! hands back an opaque bearer token that the frontend keeps and presents
//! on later requests; verify and logout read it from the same header.

pub mod login;
pub mod logout;
pub mod verify;

pub use login::login;
pub use logout::logout;
pub use verify::verify;
