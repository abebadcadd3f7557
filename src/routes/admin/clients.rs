use actix_web::{web, HttpResponse, ResponseError};
use chrono::Utc;
use reqwest::StatusCode;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::auth::admin_session::AdminSession;
use crate::domain::client::{Client, ClientBody, NewClient};

#[tracing::instrument(name = "Listing clients handler", skip(_session, db_pool))]
pub async fn handle_list_clients(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ClientError> {
    let clients = sqlx::query(
        r#"
        SELECT id, name, designation, description, avatar_url, created_at
        FROM clients
        ORDER BY created_at DESC
        "#,
    )
    .map(map_client_row)
    .fetch_all(db_pool.as_ref())
    .await
    .map_err(ClientError::ListError)?;

    Ok(HttpResponse::Ok().json(clients))
}

#[tracing::instrument(
    name = "Creating a client handler",
    skip(_session, body, db_pool),
    fields(client_name = %body.name)
)]
pub async fn handle_create_client(
    _session: AdminSession,
    body: web::Json<ClientBody>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ClientError> {
    let new_client: NewClient = body
        .into_inner()
        .try_into()
        .map_err(ClientError::ValidationError)?;

    let client = sqlx::query(
        r#"
        INSERT INTO clients (id, name, designation, description, avatar_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, designation, description, avatar_url, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_client.name)
    .bind(&new_client.designation)
    .bind(&new_client.description)
    .bind(&new_client.avatar_url)
    .bind(Utc::now())
    .map(map_client_row)
    .fetch_one(db_pool.get_ref())
    .await
    .map_err(ClientError::CreateError)?;

    Ok(HttpResponse::Created().json(client))
}

#[tracing::instrument(name = "Updating a client handler", skip(_session, body, db_pool))]
pub async fn handle_update_client(
    _session: AdminSession,
    id: web::Path<Uuid>,
    body: web::Json<ClientBody>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ClientError> {
    let updated_client: NewClient = body
        .into_inner()
        .try_into()
        .map_err(ClientError::ValidationError)?;

    let client = sqlx::query(
        r#"
        UPDATE clients
        SET name = $1, designation = $2, description = $3, avatar_url = $4
        WHERE id = $5
        RETURNING id, name, designation, description, avatar_url, created_at
        "#,
    )
    .bind(&updated_client.name)
    .bind(&updated_client.designation)
    .bind(&updated_client.description)
    .bind(&updated_client.avatar_url)
    .bind(*id)
    .map(map_client_row)
    .fetch_optional(db_pool.get_ref())
    .await
    .map_err(ClientError::UpdateError)?;

    match client {
        Some(client) => Ok(HttpResponse::Ok().json(client)),
        None => Err(ClientError::ClientNotFound),
    }
}

#[tracing::instrument(name = "Deleting a client handler", skip(_session, db_pool))]
pub async fn handle_delete_client(
    _session: AdminSession,
    id: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ClientError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(*id)
        .execute(db_pool.get_ref())
        .await
        .map_err(ClientError::DeleteError)?;

    if result.rows_affected() == 0 {
        return Err(ClientError::ClientNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

fn map_client_row(row: PgRow) -> Client {
    Client {
        id: row.get("id"),
        name: row.get("name"),
        designation: row.get("designation"),
        description: row.get("description"),
        avatar_url: row.get("avatar_url"),
        created_at: row.get("created_at"),
    }
}

#[derive(thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to load clients.")]
    ListError(#[source] sqlx::Error),
    #[error("Failed to create the client.")]
    CreateError(#[source] sqlx::Error),
    #[error("Failed to update the client.")]
    UpdateError(#[source] sqlx::Error),
    #[error("Failed to delete the client.")]
    DeleteError(#[source] sqlx::Error),
    #[error("Client does not exist.")]
    ClientNotFound,
}

impl std::fmt::Debug for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for ClientError {
    fn status_code(&self) -> StatusCode {
        match self {
            ClientError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ClientError::ClientNotFound => StatusCode::NOT_FOUND,
            ClientError::ListError(_)
            | ClientError::CreateError(_)
            | ClientError::UpdateError(_)
            | ClientError::DeleteError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
