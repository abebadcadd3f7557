use actix_web::http::header;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::admin_session::AdminSession;
use crate::domain::subscriber::Subscriber;
use crate::routes::subscriptions::map_subscriber_row;

const EXPORT_FILENAME: &str = "subscribers.csv";
const CSV_HEADER: &str = "Email,Date";

#[tracing::instrument(name = "Listing subscribers handler", skip(_session, db_pool))]
pub async fn handle_list_subscribers(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscriberDirectoryError> {
    let subscribers = get_subscribers(&db_pool).await?;
    // Trailing seven days, boundary inclusive.
    let week_ago = Utc::now() - Duration::days(7);
    let new_this_week = subscribers
        .iter()
        .filter(|subscriber| subscriber.created_at >= week_ago)
        .count();
    let total = subscribers.len();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "subscribers": subscribers,
        "total": total,
        "new_this_week": new_this_week
    })))
}

#[tracing::instrument(name = "Deleting a subscriber handler", skip(_session, db_pool))]
pub async fn handle_delete_subscriber(
    _session: AdminSession,
    id: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscriberDirectoryError> {
    let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
        .bind(*id)
        .execute(db_pool.get_ref())
        .await
        .map_err(SubscriberDirectoryError::DeleteError)?;

    if result.rows_affected() == 0 {
        return Err(SubscriberDirectoryError::SubscriberNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Exporting subscribers as CSV handler", skip(_session, db_pool))]
pub async fn handle_export_subscribers(
    _session: AdminSession,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscriberDirectoryError> {
    let subscribers = get_subscribers(&db_pool).await?;
    let csv = render_subscribers_csv(&subscribers);

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/csv"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
        ))
        .body(csv))
}

/// One `email,yyyy-MM-dd` line per subscriber under an `Email,Date` header.
fn render_subscribers_csv(subscribers: &[Subscriber]) -> String {
    let mut lines = vec![String::from(CSV_HEADER)];

    lines.extend(subscribers.iter().map(|subscriber| {
        format!(
            "{},{}",
            subscriber.email.as_ref(),
            subscriber.created_at.format("%Y-%m-%d")
        )
    }));

    lines.join("\n")
}

async fn get_subscribers(
    db_pool: &web::Data<PgPool>,
) -> Result<Vec<Subscriber>, SubscriberDirectoryError> {
    sqlx::query(
        r#"
        SELECT id, email, created_at
        FROM subscribers
        ORDER BY created_at DESC
        "#,
    )
    .map(map_subscriber_row)
    .fetch_all(db_pool.as_ref())
    .await
    .map_err(SubscriberDirectoryError::ListError)
}

#[derive(thiserror::Error)]
pub enum SubscriberDirectoryError {
    #[error("Failed to load subscribers.")]
    ListError(#[source] sqlx::Error),
    #[error("Failed to delete the subscriber.")]
    DeleteError(#[source] sqlx::Error),
    #[error("Subscriber does not exist.")]
    SubscriberNotFound,
}

impl std::fmt::Debug for SubscriberDirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for SubscriberDirectoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscriberDirectoryError::SubscriberNotFound => StatusCode::NOT_FOUND,
            SubscriberDirectoryError::ListError(_) | SubscriberDirectoryError::DeleteError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
