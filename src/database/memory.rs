use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::{Athlete, Meet, NewAthlete, NewMeet, NewResult, RaceResult, TopTime};
use super::store::{Store, TOP_TIMES_LIMIT};

/// `Store` kept entirely in process memory.
///
/// Mirrors the Postgres schema: serial ids starting at 1, foreign keys on
/// results, and cascading deletes from athletes and meets.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    athletes: BTreeMap<i32, Athlete>,
    meets: BTreeMap<i32, Meet>,
    results: BTreeMap<i32, StoredResult>,
    next_athlete_id: i32,
    next_meet_id: i32,
    next_result_id: i32,
}

#[derive(Clone)]
struct StoredResult {
    athlete_id: i32,
    meet_id: i32,
    time: String,
    place: Option<i32>,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_athletes(&self) -> Result<Vec<Athlete>, DatabaseError> {
        let tables = self.inner.read().await;
        let mut athletes: Vec<Athlete> = tables.athletes.values().cloned().collect();
        athletes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(athletes)
    }

    async fn get_athlete(&self, id: i32) -> Result<Option<Athlete>, DatabaseError> {
        Ok(self.inner.read().await.athletes.get(&id).cloned())
    }

    async fn create_athlete(&self, athlete: NewAthlete) -> Result<i32, DatabaseError> {
        let mut tables = self.inner.write().await;
        let id = next_id(&mut tables.next_athlete_id);
        tables.athletes.insert(id, athlete.into_athlete(id));
        Ok(id)
    }

    async fn update_athlete(&self, id: i32, athlete: NewAthlete) -> Result<(), DatabaseError> {
        let mut tables = self.inner.write().await;
        if let Some(existing) = tables.athletes.get_mut(&id) {
            *existing = athlete.into_athlete(id);
        }
        Ok(())
    }

    async fn delete_athlete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.inner.write().await;
        tables.athletes.remove(&id);
        tables.results.retain(|_, r| r.athlete_id != id);
        Ok(())
    }

    async fn list_meets(&self) -> Result<Vec<Meet>, DatabaseError> {
        let tables = self.inner.read().await;
        let mut meets: Vec<Meet> = tables.meets.values().cloned().collect();
        meets.sort_by_key(|m| m.meet_date);
        Ok(meets)
    }

    async fn get_meet(&self, id: i32) -> Result<Option<Meet>, DatabaseError> {
        Ok(self.inner.read().await.meets.get(&id).cloned())
    }

    async fn create_meet(&self, meet: NewMeet) -> Result<i32, DatabaseError> {
        let mut tables = self.inner.write().await;
        let id = next_id(&mut tables.next_meet_id);
        tables.meets.insert(id, meet.into_meet(id));
        Ok(id)
    }

    async fn update_meet(&self, id: i32, meet: NewMeet) -> Result<(), DatabaseError> {
        let mut tables = self.inner.write().await;
        if let Some(existing) = tables.meets.get_mut(&id) {
            *existing = meet.into_meet(id);
        }
        Ok(())
    }

    async fn delete_meet(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.inner.write().await;
        tables.meets.remove(&id);
        tables.results.retain(|_, r| r.meet_id != id);
        Ok(())
    }

    async fn results_for_meet(&self, meet_id: i32) -> Result<Vec<RaceResult>, DatabaseError> {
        let tables = self.inner.read().await;
        let mut results: Vec<RaceResult> = tables
            .results
            .iter()
            .filter(|(_, r)| r.meet_id == meet_id)
            .filter_map(|(id, r)| {
                let athlete = tables.athletes.get(&r.athlete_id)?;
                Some(RaceResult {
                    id: *id,
                    athlete_id: r.athlete_id,
                    meet_id: r.meet_id,
                    time: r.time.clone(),
                    place: r.place,
                    athlete_name: athlete.name.clone(),
                })
            })
            .collect();
        results.sort_by(|a, b| a.time.cmp(&b.time));
        Ok(results)
    }

    async fn top_times(&self) -> Result<Vec<TopTime>, DatabaseError> {
        let tables = self.inner.read().await;
        let mut times: Vec<TopTime> = tables
            .results
            .iter()
            .filter_map(|(id, r)| {
                let athlete = tables.athletes.get(&r.athlete_id)?;
                let meet = tables.meets.get(&r.meet_id)?;
                Some(TopTime {
                    id: *id,
                    athlete_id: r.athlete_id,
                    meet_id: r.meet_id,
                    time: r.time.clone(),
                    place: r.place,
                    athlete_name: athlete.name.clone(),
                    meet_name: meet.name.clone(),
                    meet_date: meet.meet_date,
                })
            })
            .collect();
        times.sort_by(|a, b| a.time.cmp(&b.time));
        times.truncate(TOP_TIMES_LIMIT);
        Ok(times)
    }

    async fn create_result(&self, result: NewResult) -> Result<i32, DatabaseError> {
        let mut tables = self.inner.write().await;
        if !tables.athletes.contains_key(&result.athlete_id) {
            return Err(DatabaseError::Query(format!(
                "foreign key violation: athlete {} does not exist",
                result.athlete_id
            )));
        }
        if !tables.meets.contains_key(&result.meet_id) {
            return Err(DatabaseError::Query(format!(
                "foreign key violation: meet {} does not exist",
                result.meet_id
            )));
        }

        let id = next_id(&mut tables.next_result_id);
        tables.results.insert(
            id,
            StoredResult {
                athlete_id: result.athlete_id,
                meet_id: result.meet_id,
                time: result.time,
                place: result.place,
            },
        );
        Ok(id)
    }

    async fn delete_result(&self, id: i32) -> Result<(), DatabaseError> {
        self.inner.write().await.results.remove(&id);
        Ok(())
    }
}
