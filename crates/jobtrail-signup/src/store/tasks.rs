use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LoadStatus;

/// A follow-up item, optionally tied to a job application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub job_id: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
    pub done: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.into(),
            job_id: None,
            due_at: None,
            done: false,
        }
    }
}

/// Tasks slice: follow-ups collection
#[derive(Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub status: LoadStatus,
}

impl TasksState {
    pub fn loading_started(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn loaded(&mut self, items: Vec<Task>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn set_done(&mut self, id: &str, done: bool) {
        if let Some(task) = self.items.iter_mut().find(|task| task.id == id) {
            task.done = done;
        }
    }
}
