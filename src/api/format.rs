//! Wire shapes for API responses.
//!
//! Rows keep nullable columns as `Option`. The frontend expects flat values,
//! so absent strings render as `""` and an absent place renders as `0`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::database::{Athlete, Meet, RaceResult, TopTime};

/// Date format used on the wire, both directions
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn text_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn place_or_zero(place: Option<i32>) -> i32 {
    place.unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResponse {
    pub id: i32,
    pub name: String,
    pub grade: i16,
    pub personal_record: String,
    pub events: String,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            grade: athlete.grade,
            personal_record: text_or_empty(athlete.personal_record),
            events: text_or_empty(athlete.events),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetResponse {
    pub id: i32,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl From<Meet> for MeetResponse {
    fn from(meet: Meet) -> Self {
        Self {
            id: meet.id,
            name: meet.name,
            date: format_date(meet.meet_date),
            location: meet.location,
            description: text_or_empty(meet.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: i32,
    pub athlete_id: i32,
    pub meet_id: i32,
    pub time: String,
    pub place: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete_name: Option<String>,
}

impl From<RaceResult> for ResultResponse {
    fn from(result: RaceResult) -> Self {
        Self {
            id: result.id,
            athlete_id: result.athlete_id,
            meet_id: result.meet_id,
            time: result.time,
            place: place_or_zero(result.place),
            athlete_name: Some(result.athlete_name).filter(|name| !name.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTimeResponse {
    pub id: i32,
    pub athlete_id: i32,
    pub meet_id: i32,
    pub time: String,
    pub place: i32,
    pub athlete_name: String,
    pub meet_name: String,
    pub meet_date: String,
}

impl From<TopTime> for TopTimeResponse {
    fn from(time: TopTime) -> Self {
        Self {
            id: time.id,
            athlete_id: time.athlete_id,
            meet_id: time.meet_id,
            time: time.time,
            place: place_or_zero(time.place),
            athlete_name: time.athlete_name,
            meet_name: time.meet_name,
            meet_date: format_date(time.meet_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}
