//! Repository for the `last_minute_tasks` collection.

use chrono::Utc;
use packwise_core::error::CoreError;
use packwise_core::last_minute::{validate_task, validate_time_before_departure};
use packwise_core::types::{new_id, EntityId};

use crate::models::last_minute_task::{CreateLastMinuteTask, LastMinuteTask, UpdateLastMinuteTask};
use crate::Store;

const ENTITY: &str = "LastMinuteTask";

/// Provides CRUD and toggle operations for last-minute tasks.
pub struct LastMinuteTaskRepo;

impl LastMinuteTaskRepo {
    /// List all tasks in stored order.
    pub async fn list(store: &Store) -> Vec<LastMinuteTask> {
        store.read().await.last_minute_tasks.values().cloned().collect()
    }

    pub async fn find_by_id(store: &Store, id: EntityId) -> Option<LastMinuteTask> {
        store.read().await.last_minute_tasks.get(&id).cloned()
    }

    pub async fn create(
        store: &Store,
        input: &CreateLastMinuteTask,
    ) -> Result<LastMinuteTask, CoreError> {
        let text = validate_task(&input.task)?;
        validate_time_before_departure(input.time_before_departure)?;

        let now = Utc::now();
        let task = LastMinuteTask {
            id: new_id(),
            task: text,
            time_before_departure: input.time_before_departure,
            is_completed: input.is_completed,
            created_at: now,
            updated_at: now,
        };
        store
            .write()
            .await
            .last_minute_tasks
            .insert(task.id, task.clone());

        tracing::debug!(task_id = %task.id, "Created last-minute task");
        Ok(task)
    }

    /// Update a task. Only `Some` fields in `input` are applied.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateLastMinuteTask,
    ) -> Result<LastMinuteTask, CoreError> {
        let text = input.task.as_deref().map(validate_task).transpose()?;
        if let Some(hours) = input.time_before_departure {
            validate_time_before_departure(hours)?;
        }

        let mut c = store.write().await;
        let task = c
            .last_minute_tasks
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Some(text) = text {
            task.task = text;
        }
        if let Some(hours) = input.time_before_departure {
            task.time_before_departure = hours;
        }
        if let Some(is_completed) = input.is_completed {
            task.is_completed = is_completed;
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    pub async fn delete(store: &Store, id: EntityId) -> Result<LastMinuteTask, CoreError> {
        let task = store
            .write()
            .await
            .last_minute_tasks
            .shift_remove(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::debug!(task_id = %id, "Deleted last-minute task");
        Ok(task)
    }

    /// Flip a task's completed flag.
    pub async fn toggle_completed(
        store: &Store,
        id: EntityId,
    ) -> Result<LastMinuteTask, CoreError> {
        let mut c = store.write().await;
        let task = c
            .last_minute_tasks
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        task.is_completed = !task.is_completed;
        task.updated_at = Utc::now();

        tracing::debug!(
            task_id = %id,
            is_completed = task.is_completed,
            "Toggled last-minute task"
        );
        Ok(task.clone())
    }
}
