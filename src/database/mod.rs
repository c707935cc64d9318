pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{connect, connection_string, DatabaseError};
pub use memory::MemoryStore;
pub use models::{Athlete, Meet, NewAthlete, NewMeet, NewResult, RaceResult, TopTime};
pub use postgres::PgStore;
pub use store::{Store, TOP_TIMES_LIMIT};
