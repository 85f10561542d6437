//! Last-minute task entity model and DTOs.

use packwise_core::last_minute::TaskSeed;
use packwise_core::types::{new_id, EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A reminder held in the `last_minute_tasks` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastMinuteTask {
    pub id: EntityId,
    pub task: String,
    /// Hours before departure the task should be done.
    pub time_before_departure: i32,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl LastMinuteTask {
    pub fn from_seed(seed: &TaskSeed, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            task: seed.task.to_string(),
            time_before_departure: seed.time_before_departure,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a last-minute task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLastMinuteTask {
    pub task: String,
    pub time_before_departure: i32,
    #[serde(default)]
    pub is_completed: bool,
}

/// DTO for updating a last-minute task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLastMinuteTask {
    pub task: Option<String>,
    pub time_before_departure: Option<i32>,
    pub is_completed: Option<bool>,
}
