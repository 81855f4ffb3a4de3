use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LoadStatus;

/// Where an application stands in the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStage {
    #[default]
    Saved,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

/// A tracked job application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub stage: JobStage,
    pub applied_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            company: company.into(),
            stage: JobStage::default(),
            applied_at: None,
        }
    }
}

/// Jobs slice: the tracked applications collection
#[derive(Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub status: LoadStatus,
}

impl JobsState {
    pub fn loading_started(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn loaded(&mut self, items: Vec<Job>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn upsert(&mut self, job: Job) {
        match self.items.iter_mut().find(|existing| existing.id == job.id) {
            Some(existing) => *existing = job,
            None => self.items.push(job),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut state = JobsState::default();
        state.upsert(Job {
            id: "j1".to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            stage: JobStage::Applied,
            applied_at: None,
        });
        state.upsert(Job {
            id: "j1".to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            stage: JobStage::Interviewing,
            applied_at: None,
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].stage, JobStage::Interviewing);
    }
}
