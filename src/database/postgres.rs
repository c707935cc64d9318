use async_trait::async_trait;
use sqlx::PgPool;

use super::manager::DatabaseError;
use super::models::{Athlete, Meet, NewAthlete, NewMeet, NewResult, RaceResult, TopTime};
use super::store::{Store, TOP_TIMES_LIMIT};

/// `Store` backed by a Postgres pool (see sql/schema.sql)
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_athletes(&self) -> Result<Vec<Athlete>, DatabaseError> {
        let rows = sqlx::query_as::<_, Athlete>(
            "SELECT id, name, grade, personal_record, events FROM athletes ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_athlete(&self, id: i32) -> Result<Option<Athlete>, DatabaseError> {
        let row = sqlx::query_as::<_, Athlete>(
            "SELECT id, name, grade, personal_record, events FROM athletes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_athlete(&self, athlete: NewAthlete) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO athletes (name, grade, personal_record, events)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&athlete.name)
        .bind(athlete.grade)
        .bind(&athlete.personal_record)
        .bind(&athlete.events)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_athlete(&self, id: i32, athlete: NewAthlete) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE athletes
            SET name = $2, grade = $3, personal_record = $4, events = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&athlete.name)
        .bind(athlete.grade)
        .bind(&athlete.personal_record)
        .bind(&athlete.events)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_athlete(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_meets(&self) -> Result<Vec<Meet>, DatabaseError> {
        let rows = sqlx::query_as::<_, Meet>(
            "SELECT id, name, meet_date, location, description FROM meets ORDER BY meet_date",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_meet(&self, id: i32) -> Result<Option<Meet>, DatabaseError> {
        let row = sqlx::query_as::<_, Meet>(
            "SELECT id, name, meet_date, location, description FROM meets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_meet(&self, meet: NewMeet) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO meets (name, meet_date, location, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&meet.name)
        .bind(meet.meet_date)
        .bind(&meet.location)
        .bind(&meet.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_meet(&self, id: i32, meet: NewMeet) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE meets
            SET name = $2, meet_date = $3, location = $4, description = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&meet.name)
        .bind(meet.meet_date)
        .bind(&meet.location)
        .bind(&meet.description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_meet(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM meets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn results_for_meet(&self, meet_id: i32) -> Result<Vec<RaceResult>, DatabaseError> {
        let rows = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT r.id, r.athlete_id, r.meet_id, r.time, r.place, a.name AS athlete_name
            FROM results r
            JOIN athletes a ON a.id = r.athlete_id
            WHERE r.meet_id = $1
            ORDER BY r.time
            "#,
        )
        .bind(meet_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_times(&self) -> Result<Vec<TopTime>, DatabaseError> {
        let rows = sqlx::query_as::<_, TopTime>(
            r#"
            SELECT r.id, r.athlete_id, r.meet_id, r.time, r.place,
                   a.name AS athlete_name, m.name AS meet_name, m.meet_date
            FROM results r
            JOIN athletes a ON a.id = r.athlete_id
            JOIN meets m ON m.id = r.meet_id
            ORDER BY r.time
            LIMIT $1
            "#,
        )
        .bind(TOP_TIMES_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_result(&self, result: NewResult) -> Result<i32, DatabaseError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO results (athlete_id, meet_id, time, place)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(result.athlete_id)
        .bind(result.meet_id)
        .bind(&result.time)
        .bind(result.place)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete_result(&self, id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
