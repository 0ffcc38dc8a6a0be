//! Student profile records for Roster Gate.
//!
//! Records are immutable once built. All construction goes through
//! [`ProfileBuilder`], which sanitizes each field before storing it;
//! [`ProfileRecord::invalidity_info`] then reports rule violations as data.

mod entity;
mod error;
mod gender;
mod record;
pub mod sanitize;
pub mod validation;

pub use entity::{BlobKey, EntityAttributes, StoredProfile};
pub use error::{ProfileError, ProfileResult};
pub use gender::Gender;
pub use record::{ProfileBuilder, ProfileRecord};
pub use validation::FieldValidator;
