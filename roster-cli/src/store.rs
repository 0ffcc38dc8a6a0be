//! In-memory profile store loaded from a JSON file

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use roster_profile::{EntityAttributes, ProfileRecord};

#[derive(Debug, Default)]
pub(crate) struct ProfileStore {
    profiles: HashMap<String, ProfileRecord>,
}

impl ProfileStore {
    /// Load a JSON array of profiles, keyed by their normalized Google ID
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile store: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse profile store: {}", path.display()))
    }

    pub(crate) fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
        let mut store = Self::default();
        for record in records {
            store.insert(record);
        }
        debug!("Loaded {} profile(s)", store.profiles.len());
        Ok(store)
    }

    pub(crate) fn insert(&mut self, record: ProfileRecord) {
        let record = record.sanitized_for_saving();
        self.profiles.insert(record.identification_string(), record);
    }

    pub(crate) fn get(&self, google_id: &str) -> Option<&ProfileRecord> {
        self.profiles.get(google_id)
    }
}
