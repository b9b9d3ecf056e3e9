use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Athlete, Claim, KarateEvent, School, User};
use crate::seed;

/// Everything the dashboard knows about, for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    pub athletes: Vec<Athlete>,
    pub schools: Vec<School>,
    pub events: Vec<KarateEvent>,
    pub claims: Vec<Claim>,
    pub users: Vec<User>,
}

impl DataSet {
    pub fn school_by_value(&self, value: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.value == value)
    }

    pub fn athletes_of_school(&self, label: &str) -> Vec<Athlete> {
        self.athletes
            .iter()
            .filter(|a| a.escuela == label)
            .cloned()
            .collect()
    }
}

/// Shared handle over the in-memory data set.
///
/// Readers get an immutable snapshot. Writers clone the current snapshot, apply
/// their change and swap the result in, so a failed update leaves the previous
/// snapshot untouched and snapshots handed out earlier never change under a reader.
#[derive(Debug, Clone, Default)]
pub struct Database {
    state: Arc<RwLock<Arc<DataSet>>>,
}

impl Database {
    pub fn new(data: DataSet) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(data))),
        }
    }

    /// Database pre-filled with the demo data, with event dates anchored on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let data = seed::dataset(today);
        tracing::info!(
            athletes = data.athletes.len(),
            schools = data.schools.len(),
            events = data.events.len(),
            claims = data.claims.len(),
            users = data.users.len(),
            "Seed data loaded"
        );
        Self::new(data)
    }

    pub async fn snapshot(&self) -> Arc<DataSet> {
        self.state.read().await.clone()
    }

    pub async fn update<T>(&self, apply: impl FnOnce(&mut DataSet) -> Result<T>) -> Result<T> {
        let mut guard = self.state.write().await;
        let mut next = DataSet::clone(&guard);
        let output = apply(&mut next)?;
        *guard = Arc::new(next);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[tokio::test]
    async fn test_failed_update_keeps_previous_snapshot() {
        let db = Database::seeded(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let before = db.snapshot().await;

        let result: Result<()> = db
            .update(|data| {
                data.athletes.clear();
                Err(StorageError::ConstraintViolation("rejected".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(*db.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_old_snapshot_is_not_affected_by_update() {
        let db = Database::seeded(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let before = db.snapshot().await;
        let count = before.schools.len();

        db.update(|data| {
            data.schools.pop();
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(before.schools.len(), count);
        assert_eq!(db.snapshot().await.schools.len(), count - 1);
    }
}
