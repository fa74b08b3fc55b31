// SPDX-License-Identifier: MIT

//! Training record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored training record in the `trainnings` table.
///
/// The owning user is referenced by username string (`userid` column),
/// not by foreign key; nothing enforces that the username exists at
/// write time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    /// Opaque unique id (assigned by the store on create)
    pub id: Uuid,
    /// Calendar date of the run
    pub date: NaiveDate,
    /// Distance in kilometers (non-negative)
    pub kilometers: f64,
    /// Elapsed time as "minutes:seconds" text, not validated further
    pub time: String,
    /// Pace as "minutes:seconds" per kilometer, computed by the client
    /// before submission and stored as-is
    pub pace: String,
    /// Free-text shoe label
    pub shoes: String,
    /// Free-text location; absent in rows from earlier schema revisions
    pub location: Option<String>,
    /// Owning user's username
    #[sqlx(rename = "userid")]
    pub user_id: String,
}

/// Creation payload; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
    pub date: NaiveDate,
    pub kilometers: f64,
    pub time: String,
    pub pace: String,
    pub shoes: String,
    #[serde(default)]
    pub location: Option<String>,
    pub user_id: String,
}
