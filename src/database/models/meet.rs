use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Meet {
    pub id: i32,
    pub name: String,
    pub meet_date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeet {
    pub name: String,
    pub meet_date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
}

impl NewMeet {
    pub fn into_meet(self, id: i32) -> Meet {
        Meet {
            id,
            name: self.name,
            meet_date: self.meet_date,
            location: self.location,
            description: self.description,
        }
    }
}
