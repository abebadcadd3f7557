use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A client testimonial rendered on the marketing site.
#[derive(Debug, serde::Serialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewClient {
    pub name: String,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct ClientBody {
    pub name: String,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

impl TryFrom<ClientBody> for NewClient {
    type Error = String;

    fn try_from(body: ClientBody) -> Result<Self, Self::Error> {
        let name = body.name.trim().to_string();

        if name.is_empty() {
            return Err(String::from("Client name cannot be empty"));
        }

        Ok(NewClient {
            name,
            designation: body.designation,
            description: body.description,
            avatar_url: body.avatar_url,
        })
    }
}
