use actix_web::{web, HttpResponse, ResponseError};
use reqwest::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::admin_session::AdminSession;
use crate::domain::contact_submission::ContactSubmission;
use crate::routes::contact::map_contact_submission_row;

#[tracing::instrument(name = "Listing inbox submissions handler", skip(_session, db_pool))]
pub async fn handle_list_inbox(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, InboxError> {
    let submissions = get_contact_submissions(&db_pool).await?;
    // The badge count is derived from the very rows we return, so the two
    // can never disagree.
    let unread = submissions
        .iter()
        .filter(|submission| !submission.is_read)
        .count();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "submissions": submissions,
        "unread": unread
    })))
}

#[tracing::instrument(name = "Marking a submission as read handler", skip(_session, db_pool))]
pub async fn handle_mark_submission_read(
    _session: AdminSession,
    id: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, InboxError> {
    // The update is idempotent: marking an already-read submission leaves it
    // read and still returns the row.
    let submission = sqlx::query(
        r#"
        UPDATE contact_submissions
        SET is_read = true
        WHERE id = $1
        RETURNING id, name, email, mobile, city, created_at, is_read
        "#,
    )
    .bind(*id)
    .map(map_contact_submission_row)
    .fetch_optional(db_pool.get_ref())
    .await
    .map_err(InboxError::MarkReadError)?;

    match submission {
        Some(submission) => Ok(HttpResponse::Ok().json(submission)),
        None => Err(InboxError::SubmissionNotFound),
    }
}

#[tracing::instrument(name = "Deleting a submission handler", skip(_session, db_pool))]
pub async fn handle_delete_submission(
    _session: AdminSession,
    id: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, InboxError> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
        .bind(*id)
        .execute(db_pool.get_ref())
        .await
        .map_err(InboxError::DeleteError)?;

    if result.rows_affected() == 0 {
        return Err(InboxError::SubmissionNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_contact_submissions(
    db_pool: &web::Data<PgPool>,
) -> Result<Vec<ContactSubmission>, InboxError> {
    sqlx::query(
        r#"
        SELECT id, name, email, mobile, city, created_at, is_read
        FROM contact_submissions
        ORDER BY created_at DESC
        "#,
    )
    .map(map_contact_submission_row)
    .fetch_all(db_pool.as_ref())
    .await
    .map_err(InboxError::ListError)
}

#[derive(thiserror::Error)]
pub enum InboxError {
    #[error("Failed to load the inbox.")]
    ListError(#[source] sqlx::Error),
    #[error("Failed to mark the submission as read.")]
    MarkReadError(#[source] sqlx::Error),
    #[error("Failed to delete the submission.")]
    DeleteError(#[source] sqlx::Error),
    #[error("Submission does not exist.")]
    SubmissionNotFound,
}

impl std::fmt::Debug for InboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for InboxError {
    fn status_code(&self) -> StatusCode {
        match self {
            InboxError::SubmissionNotFound => StatusCode::NOT_FOUND,
            InboxError::ListError(_)
            | InboxError::MarkReadError(_)
            | InboxError::DeleteError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
