//! Last-minute pre-departure checklist reference data and validation.
//!
//! Tasks are independent of any trip. The reference set below is seeded into
//! a fresh store in declaration order.

use crate::error::CoreError;

/// Maximum length for a task description (characters).
pub const MAX_TASK_LENGTH: usize = 500;

/// A seeded reminder: description and hours before departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSeed {
    pub task: &'static str,
    pub time_before_departure: i32,
}

/// Reference checklist seeded at startup.
pub const DEFAULT_TASKS: &[TaskSeed] = &[
    TaskSeed {
        task: "Check in online and download boarding passes",
        time_before_departure: 24,
    },
    TaskSeed {
        task: "Check the weather forecast at your destination",
        time_before_departure: 24,
    },
    TaskSeed {
        task: "Charge phone, laptop and power bank",
        time_before_departure: 12,
    },
    TaskSeed {
        task: "Empty the fridge and take out the trash",
        time_before_departure: 6,
    },
    TaskSeed {
        task: "Unplug appliances and adjust the thermostat",
        time_before_departure: 2,
    },
    TaskSeed {
        task: "Lock all windows and doors",
        time_before_departure: 1,
    },
];

/// Validate a task description and return it trimmed.
pub fn validate_task(task: &str) -> Result<String, CoreError> {
    let trimmed = task.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Task description must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_TASK_LENGTH {
        return Err(CoreError::Validation(format!(
            "Task description exceeds maximum length of {MAX_TASK_LENGTH} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate the hours-before-departure value.
pub fn validate_time_before_departure(hours: i32) -> Result<(), CoreError> {
    if hours < 0 {
        return Err(CoreError::Validation(format!(
            "time_before_departure must be zero or positive (got {hours})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tasks_are_valid() {
        assert_eq!(DEFAULT_TASKS.len(), 6);
        for seed in DEFAULT_TASKS {
            assert!(validate_task(seed.task).is_ok(), "{}", seed.task);
            assert!(validate_time_before_departure(seed.time_before_departure).is_ok());
        }
    }

    #[test]
    fn blank_task_is_rejected() {
        assert!(validate_task("").is_err());
        assert!(validate_task("  \t").is_err());
    }

    #[test]
    fn task_is_trimmed() {
        assert_eq!(validate_task(" Water plants ").unwrap(), "Water plants");
    }

    #[test]
    fn negative_hours_are_rejected() {
        assert!(validate_time_before_departure(-1).is_err());
        assert!(validate_time_before_departure(0).is_ok());
    }
}
