use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{MealRequestRecord, NewMealRequest};

/// Append-only audit log of incoming meal plan requests.
#[async_trait]
pub trait MealRequestStore: Send + Sync {
    async fn insert(&self, new: &NewMealRequest) -> anyhow::Result<MealRequestRecord>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgMealRequestStore {
    db: PgPool,
}

impl PgMealRequestStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealRequestStore for PgMealRequestStore {
    async fn insert(&self, new: &NewMealRequest) -> anyhow::Result<MealRequestRecord> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        let record = sqlx::query_as::<_, MealRequestRecord>(
            r#"
            INSERT INTO meal_requests (calories, meals_per_day, diet_type, goal)
            VALUES ($1, $2, $3, $4)
            RETURNING id, calories, meals_per_day, diet_type, goal
            "#,
        )
        .bind(new.calories)
        .bind(new.meals_per_day)
        .bind(&new.diet_type)
        .bind(&new.goal)
        .fetch_one(&mut *tx)
        .await
        .context("insert meal request")?;
        tx.commit().await.context("commit tx")?;
        Ok(record)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .context("ping database")?;
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::Mutex;

    use super::*;

    /// Keeps records in a Vec; `failing()` makes every call error.
    #[derive(Default)]
    pub struct InMemoryMealRequestStore {
        records: Mutex<Vec<MealRequestRecord>>,
        fail: bool,
    }

    impl InMemoryMealRequestStore {
        pub fn failing() -> Self {
            Self {
                records: Mutex::default(),
                fail: true,
            }
        }

        pub fn records(&self) -> Vec<MealRequestRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MealRequestStore for InMemoryMealRequestStore {
        async fn insert(&self, new: &NewMealRequest) -> anyhow::Result<MealRequestRecord> {
            if self.fail {
                anyhow::bail!("storage unavailable");
            }
            let mut records = self.records.lock().unwrap();
            let record = MealRequestRecord {
                id: records.len() as i64 + 1,
                calories: new.calories,
                meals_per_day: new.meals_per_day,
                diet_type: new.diet_type.clone(),
                goal: new.goal.clone(),
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn ping(&self) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("storage unavailable");
            }
            Ok(())
        }
    }
}
