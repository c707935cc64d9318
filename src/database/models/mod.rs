pub mod athlete;
pub mod meet;
pub mod result;

pub use athlete::{Athlete, NewAthlete};
pub use meet::{Meet, NewMeet};
pub use result::{NewResult, RaceResult, TopTime};
