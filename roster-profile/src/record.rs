//! The student profile record and its builder

use std::fmt;

use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::ProfileResult;
use crate::gender::Gender;
use crate::sanitize::{sanitize_email, sanitize_google_id, sanitize_name, sanitize_title};
use crate::validation::FieldValidator;

/// An immutable student profile.
///
/// Every field except `google_id` is optional and defaults to an empty
/// string (`other` for gender, the build time for `modified_date`).
/// Use [`ProfileRecord::to_builder`] to derive a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileDocument", into = "ProfileDocument")]
pub struct ProfileRecord {
    google_id: String,
    short_name: String,
    email: String,
    institute: String,
    nationality: String,
    gender: Gender,
    more_info: String,
    picture_key: String,
    modified_date: DateTime<Utc>,
}

impl ProfileRecord {
    /// Start a builder for the profile owned by `google_id`
    pub fn builder(google_id: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder::new(google_id)
    }

    /// New builder seeded with every field of this record
    pub fn to_builder(&self) -> ProfileBuilder {
        Self::builder(self.google_id.as_str())
            .with_short_name(Some(self.short_name.as_str()))
            .with_email(Some(self.email.as_str()))
            .with_institute(Some(self.institute.as_str()))
            .with_gender_value(self.gender)
            .with_nationality(Some(self.nationality.as_str()))
            .with_more_info(Some(self.more_info.as_str()))
            .with_picture_key(Some(self.picture_key.as_str()))
            .with_modified_date(Some(self.modified_date))
    }

    /// Independent copy built through the builder
    pub fn copy(&self) -> Self {
        self.to_builder().build()
    }

    pub fn google_id(&self) -> &str {
        &self.google_id
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn institute(&self) -> &str {
        &self.institute
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn more_info(&self) -> &str {
        &self.more_info
    }

    /// External picture reference; empty when no picture was uploaded
    pub fn picture_key(&self) -> &str {
        &self.picture_key
    }

    pub fn modified_date(&self) -> DateTime<Utc> {
        self.modified_date
    }

    /// Validation messages for this record, one per violated rule.
    ///
    /// Empty optional fields mean "not specified yet" and are not checked.
    /// Gender is always checked. More info is free text and the modified
    /// date is system-assigned, so neither is validated.
    pub fn invalidity_info(&self) -> Vec<String> {
        let validator = FieldValidator::new();
        let mut errors = Vec::new();

        errors.extend(validator.google_id_error(&self.google_id));

        if !self.short_name.is_empty() {
            errors.extend(validator.person_name_error(&self.short_name));
        }

        if !self.email.is_empty() {
            errors.extend(validator.email_error(&self.email));
        }

        if !self.institute.is_empty() {
            errors.extend(validator.institute_name_error(&self.institute));
        }

        if !self.nationality.is_empty() {
            errors.extend(validator.nationality_error(&self.nationality));
        }

        errors.extend(validator.gender_error(self.gender.as_str()));

        trace!(
            "Profile '{}' has {} validation error(s)",
            self.google_id,
            errors.len()
        );
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.invalidity_info().is_empty()
    }

    /// Copy of this record with the Google ID normalized for storage
    pub fn sanitized_for_saving(&self) -> Self {
        Self {
            google_id: sanitize_google_id(&self.google_id),
            ..self.clone()
        }
    }

    pub fn to_json(&self) -> ProfileResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ProfileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record from JSON. Values pass through the builder, so they
    /// are sanitized exactly as if set by hand.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Staged constructor for [`ProfileRecord`].
///
/// Setters ignore `None` (keeping the current value) and sanitize
/// everything else, except gender, which falls back to `other` for `None`
/// or unrecognized input.
#[derive(Debug, Clone)]
#[must_use]
pub struct ProfileBuilder {
    record: ProfileRecord,
}

impl ProfileBuilder {
    pub fn new(google_id: impl Into<String>) -> Self {
        Self {
            record: ProfileRecord {
                google_id: google_id.into(),
                short_name: String::new(),
                email: String::new(),
                institute: String::new(),
                nationality: String::new(),
                gender: Gender::Other,
                more_info: String::new(),
                picture_key: String::new(),
                modified_date: Utc::now(),
            },
        }
    }

    pub fn with_short_name(mut self, short_name: Option<&str>) -> Self {
        if let Some(short_name) = short_name {
            self.record.short_name = sanitize_name(short_name);
        }
        self
    }

    pub fn with_email(mut self, email: Option<&str>) -> Self {
        if let Some(email) = email {
            self.record.email = sanitize_email(email);
        }
        self
    }

    pub fn with_institute(mut self, institute: Option<&str>) -> Self {
        if let Some(institute) = institute {
            self.record.institute = sanitize_title(institute);
        }
        self
    }

    pub fn with_nationality(mut self, nationality: Option<&str>) -> Self {
        if let Some(nationality) = nationality {
            self.record.nationality = sanitize_name(nationality);
        }
        self
    }

    /// Unlike the other setters, `None` resets gender to `other`
    pub fn with_gender(mut self, gender: Option<&str>) -> Self {
        self.record.gender = Gender::parse_or_other(gender);
        self
    }

    pub fn with_gender_value(mut self, gender: Gender) -> Self {
        self.record.gender = gender;
        self
    }

    pub fn with_more_info(mut self, more_info: Option<&str>) -> Self {
        if let Some(more_info) = more_info {
            self.record.more_info = more_info.to_string();
        }
        self
    }

    pub fn with_picture_key(mut self, picture_key: Option<&str>) -> Self {
        if let Some(picture_key) = picture_key {
            self.record.picture_key = picture_key.to_string();
        }
        self
    }

    /// `None` stamps the current time
    pub fn with_modified_date(mut self, modified_date: Option<DateTime<Utc>>) -> Self {
        self.record.modified_date = modified_date.unwrap_or_else(Utc::now);
        self
    }

    pub fn build(self) -> ProfileRecord {
        self.record
    }
}

/// JSON shape of a profile record.
///
/// `pictureKey` may be omitted but not null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    google_id: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    institute: Option<String>,
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    more_info: Option<String>,
    #[serde(default)]
    picture_key: PictureKeyField,
    #[serde(default)]
    modified_date: Option<DateTime<Utc>>,
}

/// Picture key as it appears in JSON: a string, never null.
/// A null key is rejected by the deserializer rather than reported by
/// validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PictureKeyField(String);

impl From<ProfileDocument> for ProfileRecord {
    fn from(doc: ProfileDocument) -> Self {
        ProfileRecord::builder(doc.google_id)
            .with_short_name(doc.short_name.as_deref())
            .with_email(doc.email.as_deref())
            .with_institute(doc.institute.as_deref())
            .with_nationality(doc.nationality.as_deref())
            .with_gender(doc.gender.as_deref())
            .with_more_info(doc.more_info.as_deref())
            .with_picture_key(Some(doc.picture_key.0.as_str()))
            .with_modified_date(doc.modified_date)
            .build()
    }
}

impl From<ProfileRecord> for ProfileDocument {
    fn from(record: ProfileRecord) -> Self {
        Self {
            google_id: record.google_id,
            short_name: Some(record.short_name),
            email: Some(record.email),
            institute: Some(record.institute),
            nationality: Some(record.nationality),
            gender: Some(record.gender.as_str().to_string()),
            more_info: Some(record.more_info),
            picture_key: PictureKeyField(record.picture_key),
            modified_date: Some(record.modified_date),
        }
    }
}
