use chrono::NaiveDate;
use sqlx::FromRow;

/// A result row joined with the athlete's name
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RaceResult {
    pub id: i32,
    pub athlete_id: i32,
    pub meet_id: i32,
    pub time: String,
    pub place: Option<i32>,
    pub athlete_name: String,
}

/// A result row joined with both athlete and meet
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TopTime {
    pub id: i32,
    pub athlete_id: i32,
    pub meet_id: i32,
    pub time: String,
    pub place: Option<i32>,
    pub athlete_name: String,
    pub meet_name: String,
    pub meet_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    pub athlete_id: i32,
    pub meet_id: i32,
    pub time: String,
    pub place: Option<i32>,
}
