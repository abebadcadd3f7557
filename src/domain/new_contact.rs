use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::city_name::CityName;
use crate::domain::contact_name::ContactName;
use crate::domain::email_address::EmailAddress;
use crate::domain::mobile_number::MobileNumber;

/// Field name -> human readable message. Every violated field is reported,
/// not just the first one.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug)]
pub struct NewContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub mobile: MobileNumber,
    pub city: CityName,
}

#[derive(Deserialize)]
pub struct NewContactBody {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
}

impl NewContactSubmission {
    pub fn parse(body: NewContactBody) -> Result<NewContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = ContactName::parse(body.name)
            .map_err(|message| errors.insert("name", message))
            .ok();
        let email = EmailAddress::parse(body.email)
            .map_err(|message| errors.insert("email", message))
            .ok();
        let mobile = MobileNumber::parse(body.mobile)
            .map_err(|message| errors.insert("mobile", message))
            .ok();
        let city = CityName::parse(body.city)
            .map_err(|message| errors.insert("city", message))
            .ok();

        match (name, email, mobile, city) {
            (Some(name), Some(email), Some(mobile), Some(city)) => Ok(NewContactSubmission {
                name,
                email,
                mobile,
                city,
            }),
            _ => Err(errors),
        }
    }
}
