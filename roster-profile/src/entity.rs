//! Storage-side representation of profiles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::ProfileRecord;

const ENTITY_TYPE: &str = "Student Profile";
const BACKUP_LOG_PREFIX: &str = "Recently modified student profile::";

/// Opaque key of a blob held by the external blob store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobKey(String);

impl BlobKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key_string(&self) -> &str {
        &self.0
    }
}

/// Profile as persisted by the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub google_id: String,
    pub short_name: String,
    pub email: String,
    pub institute: String,
    pub nationality: String,
    pub gender: String,
    pub more_info: String,
    pub picture_key: BlobKey,
    pub modified_date: DateTime<Utc>,
}

/// Data transfer objects that map onto a storage entity
pub trait EntityAttributes {
    type Entity;

    /// Validation messages, empty when the attributes are valid
    fn invalidity_info(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.invalidity_info().is_empty()
    }

    /// Identifier used in logs and error messages
    fn identification_string(&self) -> String;

    fn entity_type(&self) -> &'static str;

    /// Line written to the backup log when the entity changes
    fn backup_identifier(&self) -> String;

    fn to_entity(&self) -> Self::Entity;

    /// Copy with storage-bound normalization applied
    fn sanitized_for_saving(&self) -> Self;
}

impl EntityAttributes for ProfileRecord {
    type Entity = StoredProfile;

    fn invalidity_info(&self) -> Vec<String> {
        ProfileRecord::invalidity_info(self)
    }

    fn identification_string(&self) -> String {
        self.google_id().to_string()
    }

    fn entity_type(&self) -> &'static str {
        ENTITY_TYPE
    }

    fn backup_identifier(&self) -> String {
        format!("{BACKUP_LOG_PREFIX}{}", self.google_id())
    }

    fn to_entity(&self) -> StoredProfile {
        StoredProfile {
            google_id: self.google_id().to_string(),
            short_name: self.short_name().to_string(),
            email: self.email().to_string(),
            institute: self.institute().to_string(),
            nationality: self.nationality().to_string(),
            gender: self.gender().as_str().to_string(),
            more_info: self.more_info().to_string(),
            picture_key: BlobKey::new(self.picture_key()),
            modified_date: self.modified_date(),
        }
    }

    fn sanitized_for_saving(&self) -> Self {
        ProfileRecord::sanitized_for_saving(self)
    }
}

impl ProfileRecord {
    /// Rebuild a record from its stored form, unwrapping the picture blob key
    pub fn from_entity(entity: &StoredProfile) -> Self {
        Self::builder(entity.google_id.as_str())
            .with_short_name(Some(entity.short_name.as_str()))
            .with_email(Some(entity.email.as_str()))
            .with_institute(Some(entity.institute.as_str()))
            .with_gender(Some(entity.gender.as_str()))
            .with_nationality(Some(entity.nationality.as_str()))
            .with_more_info(Some(entity.more_info.as_str()))
            .with_picture_key(Some(entity.picture_key.key_string()))
            .with_modified_date(Some(entity.modified_date))
            .build()
    }
}

impl From<&StoredProfile> for ProfileRecord {
    fn from(entity: &StoredProfile) -> Self {
        Self::from_entity(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;

    fn record() -> ProfileRecord {
        ProfileRecord::builder("alice.tmms")
            .with_short_name(Some("Alice"))
            .with_email(Some("alice@example.com"))
            .with_institute(Some("National University"))
            .with_nationality(Some("Singaporean"))
            .with_gender(Some("female"))
            .with_more_info(Some("Hello"))
            .with_picture_key(Some("blob-123"))
            .build()
    }

    #[test]
    fn test_to_entity_wraps_picture_key() {
        let entity = record().to_entity();
        assert_eq!(entity.picture_key, BlobKey::new("blob-123"));
        assert_eq!(entity.gender, "female");
        assert_eq!(entity.google_id, "alice.tmms");
    }

    #[test]
    fn test_entity_round_trip() {
        let original = record();
        let restored = ProfileRecord::from(&original.to_entity());
        assert_eq!(restored, original);
        assert_eq!(restored.picture_key(), "blob-123");
    }

    #[test]
    fn test_from_entity_coerces_unknown_gender() {
        let mut entity = record().to_entity();
        entity.gender = "n/a".to_string();
        assert_eq!(ProfileRecord::from_entity(&entity).gender(), Gender::Other);
    }

    #[test]
    fn test_entity_metadata() {
        let record = record();
        assert_eq!(record.identification_string(), "alice.tmms");
        assert_eq!(record.entity_type(), "Student Profile");
        assert_eq!(
            record.backup_identifier(),
            "Recently modified student profile::alice.tmms"
        );
        assert!(EntityAttributes::is_valid(&record));
    }

    #[test]
    fn test_stored_profile_serializes_blob_key_as_string() {
        let json = serde_json::to_value(record().to_entity()).unwrap();
        assert_eq!(json["pictureKey"], "blob-123");
    }
}
