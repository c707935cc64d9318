//! Request bodies for create/update and their validation.
//!
//! Every field is optional at the serde level so that a missing or `null`
//! field produces a "<field> is required" message instead of a parser error.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::api::DATE_FORMAT;
use crate::database::{NewAthlete, NewMeet, NewResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
}

/// Turns a parsed request body into the storage-level input
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::Required { field })
}

fn required_id(value: Option<i32>, field: &'static str) -> Result<i32, ValidationError> {
    value
        .filter(|v| *v != 0)
        .ok_or(ValidationError::Required { field })
}

/// Empty strings are stored as NULL
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePayload {
    pub name: Option<String>,
    /// Narrower than the SMALLINT column, so out-of-range grades fail to decode
    pub grade: Option<i8>,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}

impl Validate for AthletePayload {
    type Output = NewAthlete;

    fn validate(self) -> Result<NewAthlete, ValidationError> {
        Ok(NewAthlete {
            name: required_text(self.name, "name")?,
            grade: self
                .grade
                .filter(|g| *g != 0)
                .map(i16::from)
                .ok_or(ValidationError::Required { field: "grade" })?,
            personal_record: optional_text(self.personal_record),
            events: optional_text(self.events),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetPayload {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Validate for MeetPayload {
    type Output = NewMeet;

    fn validate(self) -> Result<NewMeet, ValidationError> {
        let name = required_text(self.name, "name")?;
        let date = required_text(self.date, "date")?;
        let location = required_text(self.location, "location")?;

        let meet_date =
            NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)?;

        Ok(NewMeet {
            name,
            meet_date,
            location,
            description: optional_text(self.description),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    pub athlete_id: Option<i32>,
    pub meet_id: Option<i32>,
    pub time: Option<String>,
    pub place: Option<i32>,
}

impl Validate for ResultPayload {
    type Output = NewResult;

    fn validate(self) -> Result<NewResult, ValidationError> {
        Ok(NewResult {
            athlete_id: required_id(self.athlete_id, "athleteId")?,
            meet_id: required_id(self.meet_id, "meetId")?,
            time: required_text(self.time, "time")?,
            // Non-positive places mean "not recorded"
            place: self.place.filter(|p| *p > 0),
        })
    }
}
