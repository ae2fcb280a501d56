use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Text,
    Image,
    Photo,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Text, TaskKind::Image, TaskKind::Photo];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Text => "text",
            TaskKind::Image => "image",
            TaskKind::Photo => "photo",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed sample task. Never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: Uuid,
    kind: TaskKind,
    text: Option<String>,
    duration_seconds: u32,
    submitted_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Build a record with a fresh id. Range checks belong to [`super::TaskDraft`].
    pub(crate) fn new(kind: TaskKind, text: Option<String>, duration_seconds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text,
            duration_seconds,
            submitted_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
