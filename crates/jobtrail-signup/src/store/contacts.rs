use serde::{Deserialize, Serialize};

use super::LoadStatus;

/// A recruiter or referral contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            company: None,
        }
    }
}

/// Contacts slice: the address book collection
#[derive(Debug, Default)]
pub struct ContactsState {
    pub items: Vec<Contact>,
    pub status: LoadStatus,
}

impl ContactsState {
    pub fn loading_started(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn loaded(&mut self, items: Vec<Contact>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }
}
