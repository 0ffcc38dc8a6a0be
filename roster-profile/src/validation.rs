//! Field format rules for profile records
//!
//! Each check returns `None` when the value is acceptable, or a single
//! human-readable message describing the first rule it breaks.

use regex::Regex;
use std::sync::OnceLock;

use crate::gender::Gender;

pub const GOOGLE_ID_MAX_LENGTH: usize = 254;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PERSON_NAME_MAX_LENGTH: usize = 100;
pub const INSTITUTE_NAME_MAX_LENGTH: usize = 64;
pub const NATIONALITY_MAX_LENGTH: usize = 55;

const GOOGLE_ID_FIELD: &str = "Google ID";
const EMAIL_FIELD: &str = "email";
const PERSON_NAME_FIELD: &str = "person name";
const INSTITUTE_NAME_FIELD: &str = "institute name";
const NATIONALITY_FIELD: &str = "nationality";
const GENDER_FIELD: &str = "gender";

const NAME_HINT: &str = "It should start with an alphanumeric character and cannot contain any vertical bar (|) or percent sign (%).";

fn google_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9@._\-]+$").expect("valid google id regex"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\w+'.\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("valid email regex")
    })
}

fn nationality_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{L}[\p{L} '.\-]*$").expect("valid nationality regex"))
}

/// Validates individual profile fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn google_id_error(&self, value: &str) -> Option<String> {
        let hint = "A Google ID must be a valid id already registered with Google. It cannot contain any space, and may only contain letters, digits, '@', '.', '_' and '-'.";
        if value.is_empty() {
            return Some(empty_message(GOOGLE_ID_FIELD, hint));
        }
        if let Some(msg) = length_error(value, GOOGLE_ID_FIELD, GOOGLE_ID_MAX_LENGTH) {
            return Some(msg);
        }
        if !google_id_regex().is_match(value) {
            return Some(format_message(value, GOOGLE_ID_FIELD, "is not in the correct format", hint));
        }
        if value.contains('@') && !email_regex().is_match(value) {
            return Some(format_message(
                value,
                GOOGLE_ID_FIELD,
                "is not in the correct format",
                "A Google ID containing '@' must be a valid email address.",
            ));
        }
        None
    }

    pub fn email_error(&self, value: &str) -> Option<String> {
        let hint = "An email address contains some text followed by one '@' sign followed by some more text, and should end with a top level domain address like .com.";
        if value.is_empty() {
            return Some(empty_message(EMAIL_FIELD, hint));
        }
        if let Some(msg) = length_error(value, EMAIL_FIELD, EMAIL_MAX_LENGTH) {
            return Some(msg);
        }
        if !email_regex().is_match(value) {
            return Some(format_message(value, EMAIL_FIELD, "is not in the correct format", hint));
        }
        None
    }

    pub fn person_name_error(&self, value: &str) -> Option<String> {
        name_like_error(value, PERSON_NAME_FIELD, PERSON_NAME_MAX_LENGTH)
    }

    pub fn institute_name_error(&self, value: &str) -> Option<String> {
        name_like_error(value, INSTITUTE_NAME_FIELD, INSTITUTE_NAME_MAX_LENGTH)
    }

    pub fn nationality_error(&self, value: &str) -> Option<String> {
        let hint = "A nationality may only contain letters, spaces, hyphens, apostrophes and periods, and should start with a letter.";
        if value.is_empty() {
            return Some(empty_message(NATIONALITY_FIELD, hint));
        }
        if let Some(msg) = length_error(value, NATIONALITY_FIELD, NATIONALITY_MAX_LENGTH) {
            return Some(msg);
        }
        if !nationality_regex().is_match(value) {
            return Some(format_message(value, NATIONALITY_FIELD, "is not in the correct format", hint));
        }
        None
    }

    pub fn gender_error(&self, value: &str) -> Option<String> {
        if Gender::parse(value).is_some() {
            return None;
        }
        Some(format_message(
            value,
            GENDER_FIELD,
            "is not an accepted gender",
            &format!("The value must be one of: {}.", Gender::ACCEPTED.join(", ")),
        ))
    }
}

fn name_like_error(value: &str, field: &str, max_length: usize) -> Option<String> {
    if value.is_empty() {
        return Some(empty_message(field, NAME_HINT));
    }
    if let Some(msg) = length_error(value, field, max_length) {
        return Some(msg);
    }
    let starts_alphanumeric = value.chars().next().is_some_and(char::is_alphanumeric);
    if !starts_alphanumeric {
        return Some(format_message(
            value,
            field,
            "starts with a non-alphanumeric character",
            NAME_HINT,
        ));
    }
    if value.contains('|') || value.contains('%') {
        return Some(format_message(value, field, "contains invalid characters", NAME_HINT));
    }
    None
}

fn length_error(value: &str, field: &str, max_length: usize) -> Option<String> {
    if value.chars().count() <= max_length {
        return None;
    }
    Some(format_message(
        value,
        field,
        "is too long",
        &format!("The value of a/an {field} should be no longer than {max_length} characters."),
    ))
}

fn empty_message(field: &str, hint: &str) -> String {
    format!("The field '{field}' is empty. {hint}")
}

fn format_message(value: &str, field: &str, reason: &str, hint: &str) -> String {
    format!("\"{value}\" is not acceptable as a/an {field} because it {reason}. {hint}")
}
