use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where a task sits in its lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Canonical string the backend stores.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable form for badges and lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err("unknown task status"),
        }
    }
}

/// Urgency bucket shared by tasks and recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Canonical string the backend stores.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable form for badges and lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as the server returns it.
///
/// The client never owns an authoritative copy: each view keeps its own
/// transient snapshot for the lifetime of the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier.
    pub id: String,

    /// Short title shown in lists.
    pub title: String,

    /// Longer description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Course or subject the task belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Lifecycle state.
    pub status: TaskStatus,

    /// Urgency bucket.
    pub priority: Priority,

    /// Deadline, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_roundtrip() {
        for (text, status) in [
            ("pending", TaskStatus::Pending),
            ("in_progress", TaskStatus::InProgress),
            ("completed", TaskStatus::Completed),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(TaskStatus::from_str(text).unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown() {
        assert!(TaskStatus::from_str("archived").is_err());
    }

    #[test]
    fn labels_are_presentable() {
        assert_eq!(TaskStatus::InProgress.label(), "In progress");
        assert_eq!(Priority::High.label(), "High");
    }

    /// Enum wire values match the backend's snake_case strings.
    #[test]
    fn status_and_priority_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), r#""in_progress""#);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
    }

    #[test]
    fn task_deserializes_from_backend_shape() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "task-9",
                "title": "Finish lab report",
                "subject": "Chemistry",
                "status": "in_progress",
                "priority": "high",
                "dueDate": "2026-03-15T17:00:00Z",
                "createdAt": "2026-03-01T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(task.id, "task-9");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description, None);
        assert_eq!(
            task.due_date,
            Some(Utc.with_ymd_and_hms(2026, 3, 15, 17, 0, 0).unwrap())
        );
    }

    #[test]
    fn task_without_deadline() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "task-1",
                "title": "Read chapter 4",
                "status": "pending",
                "priority": "low",
                "createdAt": "2026-03-01T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert!(task.due_date.is_none());
        assert!(task.subject.is_none());
    }
}
