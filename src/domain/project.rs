use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A development the brokerage is marketing. Managed exclusively from the
/// admin console.
#[derive(Debug, serde::Serialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct ProjectBody {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl TryFrom<ProjectBody> for NewProject {
    type Error = String;

    fn try_from(body: ProjectBody) -> Result<Self, Self::Error> {
        let name = body.name.trim().to_string();

        if name.is_empty() {
            return Err(String::from("Project name cannot be empty"));
        }

        Ok(NewProject {
            name,
            description: body.description,
            location: body.location,
            price: body.price,
            image_url: body.image_url,
        })
    }
}
