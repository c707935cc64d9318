use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Athlete {
    pub id: i32,
    pub name: String,
    pub grade: i16,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}

/// Insert/update payload after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAthlete {
    pub name: String,
    pub grade: i16,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}

impl NewAthlete {
    pub fn into_athlete(self, id: i32) -> Athlete {
        Athlete {
            id,
            name: self.name,
            grade: self.grade,
            personal_record: self.personal_record,
            events: self.events,
        }
    }
}
