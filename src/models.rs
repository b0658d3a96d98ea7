//! Frontend Models
//!
//! Data structures matching the remote todo resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
/// The store owns the format; integers and strings are both accepted and
/// sent back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Full desired state for an update request with a new title.
    pub fn with_title(&self, title: &str) -> TaskPayload {
        TaskPayload {
            title: title.to_string(),
            completed: self.completed,
        }
    }

    /// Full desired state for an update request with completion flipped.
    pub fn toggled(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            completed: !self.completed,
        }
    }
}

/// Body of create and update requests. Both fields are always sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub completed: bool,
}

impl TaskPayload {
    pub fn new_pending(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
        }
    }
}

/// View filter over the local collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }
}

/// Presentation theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, completed: bool) -> Task {
        Task { id: TaskId::Int(id), title: format!("t{}", id), completed }
    }

    #[test]
    fn test_task_id_accepts_numbers_and_strings() {
        let numeric: Task = serde_json::from_str(r#"{"id":7,"title":"a","completed":false}"#).unwrap();
        assert_eq!(numeric.id, TaskId::Int(7));

        let text: Task = serde_json::from_str(r#"{"id":"abc","title":"a","completed":true}"#).unwrap();
        assert_eq!(text.id, TaskId::Text("abc".into()));
        assert_eq!(text.id.to_string(), "abc");
    }

    #[test]
    fn test_filter_predicates() {
        let done = task(1, true);
        let open = task(2, false);

        assert!(Filter::All.matches(&done) && Filter::All.matches(&open));
        assert!(Filter::Completed.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Pending.matches(&open));
        assert!(!Filter::Pending.matches(&done));
    }

    #[test]
    fn test_update_payloads_carry_both_fields() {
        let t = task(1, false);

        let body = serde_json::to_value(t.toggled()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "t1", "completed": true}));

        let body = serde_json::to_value(t.with_title("renamed")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "renamed", "completed": false}));
    }

    #[test]
    fn test_theme_strings() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("night"), None);
    }
}
