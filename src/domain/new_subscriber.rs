use serde::Deserialize;

use crate::domain::email_address::EmailAddress;

pub struct NewSubscriber {
    pub email: EmailAddress,
}

#[derive(Deserialize)]
pub struct NewSubscriberBody {
    pub email: String,
}

impl TryFrom<NewSubscriberBody> for NewSubscriber {
    type Error = String;

    fn try_from(body: NewSubscriberBody) -> Result<Self, Self::Error> {
        let email = EmailAddress::parse(body.email)?;

        Ok(NewSubscriber { email })
    }
}
