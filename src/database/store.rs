use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{Athlete, Meet, NewAthlete, NewMeet, NewResult, RaceResult, TopTime};

/// How many rows `top_times` returns
pub const TOP_TIMES_LIMIT: usize = 10;

/// Relational storage behind the resource handlers.
///
/// Point lookups return `Ok(None)` on a miss. Updates and deletes of missing
/// ids succeed without touching anything.
#[async_trait]
pub trait Store: Send + Sync {
    // Athletes
    async fn list_athletes(&self) -> Result<Vec<Athlete>, DatabaseError>;
    async fn get_athlete(&self, id: i32) -> Result<Option<Athlete>, DatabaseError>;
    async fn create_athlete(&self, athlete: NewAthlete) -> Result<i32, DatabaseError>;
    async fn update_athlete(&self, id: i32, athlete: NewAthlete) -> Result<(), DatabaseError>;
    async fn delete_athlete(&self, id: i32) -> Result<(), DatabaseError>;

    // Meets
    async fn list_meets(&self) -> Result<Vec<Meet>, DatabaseError>;
    async fn get_meet(&self, id: i32) -> Result<Option<Meet>, DatabaseError>;
    async fn create_meet(&self, meet: NewMeet) -> Result<i32, DatabaseError>;
    async fn update_meet(&self, id: i32, meet: NewMeet) -> Result<(), DatabaseError>;
    async fn delete_meet(&self, id: i32) -> Result<(), DatabaseError>;

    // Results
    async fn results_for_meet(&self, meet_id: i32) -> Result<Vec<RaceResult>, DatabaseError>;
    /// Fastest `TOP_TIMES_LIMIT` results across all meets
    async fn top_times(&self) -> Result<Vec<TopTime>, DatabaseError>;
    async fn create_result(&self, result: NewResult) -> Result<i32, DatabaseError>;
    async fn delete_result(&self, id: i32) -> Result<(), DatabaseError>;
}
