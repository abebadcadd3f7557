use actix_web::{web, HttpResponse, ResponseError};
use chrono::Utc;
use reqwest::StatusCode;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::auth::admin_session::AdminSession;
use crate::domain::project::{NewProject, Project, ProjectBody};

#[tracing::instrument(name = "Listing projects handler", skip(_session, db_pool))]
pub async fn handle_list_projects(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ProjectError> {
    let projects = sqlx::query(
        r#"
        SELECT id, name, description, location, price, image_url, created_at
        FROM projects
        ORDER BY created_at DESC
        "#,
    )
    .map(map_project_row)
    .fetch_all(db_pool.as_ref())
    .await
    .map_err(ProjectError::ListError)?;

    Ok(HttpResponse::Ok().json(projects))
}

#[tracing::instrument(
    name = "Creating a project handler",
    skip(_session, body, db_pool),
    fields(project_name = %body.name)
)]
pub async fn handle_create_project(
    _session: AdminSession,
    body: web::Json<ProjectBody>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ProjectError> {
    let new_project: NewProject = body
        .into_inner()
        .try_into()
        .map_err(ProjectError::ValidationError)?;

    let project = sqlx::query(
        r#"
        INSERT INTO projects (id, name, description, location, price, image_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, description, location, price, image_url, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_project.name)
    .bind(&new_project.description)
    .bind(&new_project.location)
    .bind(&new_project.price)
    .bind(&new_project.image_url)
    .bind(Utc::now())
    .map(map_project_row)
    .fetch_one(db_pool.get_ref())
    .await
    .map_err(ProjectError::CreateError)?;

    Ok(HttpResponse::Created().json(project))
}

#[tracing::instrument(name = "Updating a project handler", skip(_session, body, db_pool))]
pub async fn handle_update_project(
    _session: AdminSession,
    id: web::Path<Uuid>,
    body: web::Json<ProjectBody>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ProjectError> {
    let updated_project: NewProject = body
        .into_inner()
        .try_into()
        .map_err(ProjectError::ValidationError)?;

    // Last write wins, there is no version column guarding concurrent edits.
    let project = sqlx::query(
        r#"
        UPDATE projects
        SET name = $1, description = $2, location = $3, price = $4, image_url = $5
        WHERE id = $6
        RETURNING id, name, description, location, price, image_url, created_at
        "#,
    )
    .bind(&updated_project.name)
    .bind(&updated_project.description)
    .bind(&updated_project.location)
    .bind(&updated_project.price)
    .bind(&updated_project.image_url)
    .bind(*id)
    .map(map_project_row)
    .fetch_optional(db_pool.get_ref())
    .await
    .map_err(ProjectError::UpdateError)?;

    match project {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(ProjectError::ProjectNotFound),
    }
}

#[tracing::instrument(name = "Deleting a project handler", skip(_session, db_pool))]
pub async fn handle_delete_project(
    _session: AdminSession,
    id: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ProjectError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(*id)
        .execute(db_pool.get_ref())
        .await
        .map_err(ProjectError::DeleteError)?;

    if result.rows_affected() == 0 {
        return Err(ProjectError::ProjectNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

fn map_project_row(row: PgRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        location: row.get("location"),
        price: row.get("price"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
    }
}

#[derive(thiserror::Error)]
pub enum ProjectError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to load projects.")]
    ListError(#[source] sqlx::Error),
    #[error("Failed to create the project.")]
    CreateError(#[source] sqlx::Error),
    #[error("Failed to update the project.")]
    UpdateError(#[source] sqlx::Error),
    #[error("Failed to delete the project.")]
    DeleteError(#[source] sqlx::Error),
    #[error("Project does not exist.")]
    ProjectNotFound,
}

impl std::fmt::Debug for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for ProjectError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProjectError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ProjectError::ProjectNotFound => StatusCode::NOT_FOUND,
            ProjectError::ListError(_)
            | ProjectError::CreateError(_)
            | ProjectError::UpdateError(_)
            | ProjectError::DeleteError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
