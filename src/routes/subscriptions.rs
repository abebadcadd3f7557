use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    email_address::EmailAddress,
    new_subscriber::{NewSubscriber, NewSubscriberBody},
    subscriber::Subscriber,
};

const UNIQUE_VIOLATION_CODE: &str = "23505";

#[tracing::instrument(
    name = "Creating a new subscriber handler",
    skip(body, db_pool),
    fields(subscriber_email = %body.email)
)]
pub async fn handle_create_subscription(
    body: web::Json<NewSubscriberBody>,
    db_pool: web::Data<PgPool>,
) -> impl Responder {
    let new_subscriber: NewSubscriber = match body.into_inner().try_into() {
        Ok(subscriber) => subscriber,
        Err(err) => {
            tracing::error!("Validation error: {:?}", err);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "errors": { "email": err }
            }));
        }
    };

    match insert_subscriber(&new_subscriber, &db_pool).await {
        Ok(subscriber) => HttpResponse::Created().json(serde_json::json!({
            "outcome": "subscribed",
            "subscriber": subscriber
        })),
        // A uniqueness conflict is a benign outcome, the visitor is simply
        // subscribed already.
        Err(err) if is_unique_violation(&err) => {
            tracing::info!(
                "Email {} is already subscribed",
                new_subscriber.email.as_ref()
            );
            HttpResponse::Ok().json(serde_json::json!({
                "outcome": "already_subscribed"
            }))
        }
        Err(err) => {
            tracing::error!("Failed to insert new subscriber: {:?}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Insert a new subscriber into the database",
    skip(new_subscriber, db_pool)
)]
async fn insert_subscriber(
    new_subscriber: &NewSubscriber,
    db_pool: &web::Data<PgPool>,
) -> Result<Subscriber, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO subscribers (id, email, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, email, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_subscriber.email.as_ref())
    .bind(Utc::now())
    .map(map_subscriber_row)
    .fetch_one(db_pool.get_ref())
    .await
}

pub(crate) fn map_subscriber_row(row: PgRow) -> Subscriber {
    Subscriber {
        id: row.get("id"),
        email: EmailAddress::parse(row.get("email")).unwrap(),
        created_at: row.get("created_at"),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION_CODE),
        _ => false,
    }
}
