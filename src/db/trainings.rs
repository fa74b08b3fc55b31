// SPDX-License-Identifier: MIT

//! Record store: row-level operations on the `trainnings` table.
//!
//! The table name keeps the hosted schema's spelling. Rows reference
//! their owner by username string in the `userid` column.

use crate::error::AppError;
use crate::models::{NewTraining, Training};
use chrono::Datelike;
use sqlx::PgPool;
use uuid::Uuid;

const TRAINING_COLUMNS: &str = "id, date, kilometers, time, pace, shoes, location, userid";

/// Store adapter for the `trainnings` table.
#[derive(Clone)]
pub struct TrainingStore {
    pool: PgPool,
}

impl TrainingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all training records.
    pub async fn list(&self) -> Result<Vec<Training>, AppError> {
        let rows = sqlx::query_as::<_, Training>(&format!(
            "SELECT {} FROM trainnings",
            TRAINING_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Fetched trainings");
        Ok(rows)
    }

    /// Fetch a training record by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Training>, AppError> {
        let row = sqlx::query_as::<_, Training>(&format!(
            "SELECT {} FROM trainnings WHERE id = $1",
            TRAINING_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Fetch all training records owned by a user.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Training>, AppError> {
        let rows = sqlx::query_as::<_, Training>(&format!(
            "SELECT {} FROM trainnings WHERE userid = $1",
            TRAINING_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(user_id, count = rows.len(), "Fetched trainings for user");
        Ok(rows)
    }

    /// Fetch a user's training records, optionally keeping only one
    /// calendar year.
    ///
    /// The year filter is applied here after fetching the user's full set,
    /// a deliberate simplification rather than a database-side predicate.
    pub async fn list_by_user_and_year(
        &self,
        user_id: &str,
        year: Option<i32>,
    ) -> Result<Vec<Training>, AppError> {
        let rows = self.list_by_user(user_id).await?;
        Ok(filter_by_year(rows, year))
    }

    /// Distinct calendar years present in a user's records, most recent
    /// first.
    pub async fn distinct_years(&self, user_id: &str) -> Result<Vec<i32>, AppError> {
        let rows = self.list_by_user(user_id).await?;
        Ok(distinct_years_desc(&rows))
    }

    /// Insert a new training record with a fresh id.
    pub async fn create(&self, new: NewTraining) -> Result<Training, AppError> {
        let id = Uuid::new_v4();
        tracing::info!(%id, user_id = %new.user_id, date = %new.date, "Creating training");

        let row = sqlx::query_as::<_, Training>(&format!(
            "INSERT INTO trainnings (id, date, kilometers, time, pace, shoes, location, userid) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            TRAINING_COLUMNS
        ))
        .bind(id)
        .bind(new.date)
        .bind(new.kilometers)
        .bind(&new.time)
        .bind(&new.pace)
        .bind(&new.shoes)
        .bind(&new.location)
        .bind(&new.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a training record by id. Returns false when no row matched.
    ///
    /// A single conditional delete, so a concurrent delete of the same row
    /// is reported accurately instead of racing a separate existence check.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trainnings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::warn!(%id, "Training not found for delete");
        }
        Ok(deleted)
    }
}

/// Keep only records whose date falls in `year`; `None` keeps everything.
fn filter_by_year(rows: Vec<Training>, year: Option<i32>) -> Vec<Training> {
    match year {
        Some(year) => rows.into_iter().filter(|t| t.date.year() == year).collect(),
        None => rows,
    }
}

/// Distinct calendar years across the given records, sorted descending.
pub(crate) fn distinct_years_desc(rows: &[Training]) -> Vec<i32> {
    let mut years: Vec<i32> = rows.iter().map(|t| t.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_training(date: &str) -> Training {
        Training {
            id: Uuid::new_v4(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kilometers: 10.0,
            time: "50:00".to_string(),
            pace: "5:00".to_string(),
            shoes: "Test Shoe".to_string(),
            location: None,
            user_id: "alice".to_string(),
        }
    }

    #[test]
    fn test_filter_by_year() {
        let rows = vec![
            make_training("2023-06-01"),
            make_training("2024-03-01"),
            make_training("2024-11-20"),
        ];

        let filtered = filter_by_year(rows.clone(), Some(2024));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.date.year() == 2024));

        // Absent year keeps the full set
        assert_eq!(filter_by_year(rows, None).len(), 3);
    }

    #[test]
    fn test_filter_by_year_no_match() {
        let rows = vec![make_training("2024-03-01")];
        assert!(filter_by_year(rows, Some(1999)).is_empty());
    }

    #[test]
    fn test_distinct_years_desc() {
        let rows = vec![
            make_training("2022-01-01"),
            make_training("2024-05-05"),
            make_training("2024-08-09"),
            make_training("2023-12-31"),
        ];

        assert_eq!(distinct_years_desc(&rows), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_distinct_years_empty() {
        assert!(distinct_years_desc(&[]).is_empty());
    }
}
