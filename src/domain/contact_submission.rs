use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::city_name::CityName;
use crate::domain::contact_name::ContactName;
use crate::domain::email_address::EmailAddress;
use crate::domain::mobile_number::MobileNumber;

/// A persisted consultation request. Immutable once stored, except for the
/// read flag the moderation view flips.
#[derive(Debug, serde::Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: ContactName,
    pub email: EmailAddress,
    pub mobile: MobileNumber,
    pub city: CityName,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
