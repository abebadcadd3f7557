use actix_web::{web, HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::auth::admin_session::AdminSession;

const RECENT_SUBMISSIONS_LIMIT: i64 = 3;

/// Trimmed-down submission row for the dashboard's recent-activity panel.
#[derive(Debug, serde::Serialize)]
pub struct RecentSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[tracing::instrument(name = "Dashboard overview handler", skip(_session, db_pool))]
pub async fn handle_dashboard(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, DashboardError> {
    let projects = count_table_rows(&db_pool, "projects").await?;
    let clients = count_table_rows(&db_pool, "clients").await?;
    let contacts = count_table_rows(&db_pool, "contact_submissions").await?;
    let subscribers = count_table_rows(&db_pool, "subscribers").await?;
    let recent_submissions = get_recent_submissions(&db_pool).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "totals": {
            "projects": projects,
            "clients": clients,
            "contacts": contacts,
            "subscribers": subscribers
        },
        "recent_submissions": recent_submissions
    })))
}

async fn count_table_rows(
    db_pool: &web::Data<PgPool>,
    table: &str,
) -> Result<i64, DashboardError> {
    // 'table' is one of our four fixed table names, never user input.
    sqlx::query(&format!("SELECT COUNT(*) AS count FROM {}", table))
        .map(|row: PgRow| row.get::<i64, _>("count"))
        .fetch_one(db_pool.as_ref())
        .await
        .map_err(DashboardError::CountError)
}

async fn get_recent_submissions(
    db_pool: &web::Data<PgPool>,
) -> Result<Vec<RecentSubmission>, DashboardError> {
    sqlx::query(
        r#"
        SELECT id, name, email, city, created_at
        FROM contact_submissions
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(RECENT_SUBMISSIONS_LIMIT)
    .map(|row: PgRow| RecentSubmission {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        city: row.get("city"),
        created_at: row.get("created_at"),
    })
    .fetch_all(db_pool.as_ref())
    .await
    .map_err(DashboardError::RecentSubmissionsError)
}

#[derive(thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to count table rows.")]
    CountError(#[source] sqlx::Error),
    #[error("Failed to load recent submissions.")]
    RecentSubmissionsError(#[source] sqlx::Error),
}

impl std::fmt::Debug for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::CountError(_) | DashboardError::RecentSubmissionsError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
