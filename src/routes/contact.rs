use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    city_name::CityName,
    contact_name::ContactName,
    contact_submission::ContactSubmission,
    email_address::EmailAddress,
    mobile_number::MobileNumber,
    new_contact::{NewContactBody, NewContactSubmission},
};

#[tracing::instrument(
    name = "Submitting a consultation request handler",
    skip(body, db_pool),
    fields(
        contact_email = %body.email,
        contact_city = %body.city
    )
)]
pub async fn handle_submit_contact(
    body: web::Json<NewContactBody>,
    db_pool: web::Data<PgPool>,
) -> impl Responder {
    let new_contact = match NewContactSubmission::parse(body.into_inner()) {
        Ok(new_contact) => new_contact,
        Err(field_errors) => {
            tracing::error!("Validation error: {:?}", field_errors);
            // Every violated field is reported at once so the form can show
            // all of them together.
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "errors": field_errors }));
        }
    };

    match insert_contact_submission(&new_contact, &db_pool).await {
        Ok(submission) => HttpResponse::Created().json(submission),
        Err(err) => {
            tracing::error!("Failed to insert contact submission: {:?}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Insert a new contact submission into the database",
    skip(new_contact, db_pool)
)]
async fn insert_contact_submission(
    new_contact: &NewContactSubmission,
    db_pool: &web::Data<PgPool>,
) -> Result<ContactSubmission, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO contact_submissions (id, name, email, mobile, city, created_at, is_read)
        VALUES ($1, $2, $3, $4, $5, $6, false)
        RETURNING id, name, email, mobile, city, created_at, is_read
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_contact.name.as_ref())
    .bind(new_contact.email.as_ref())
    .bind(new_contact.mobile.as_ref())
    .bind(new_contact.city.as_ref())
    .bind(Utc::now())
    .map(map_contact_submission_row)
    .fetch_one(db_pool.get_ref())
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

pub(crate) fn map_contact_submission_row(row: PgRow) -> ContactSubmission {
    ContactSubmission {
        id: row.get("id"),
        name: ContactName::parse(row.get("name")).unwrap(),
        email: EmailAddress::parse(row.get("email")).unwrap(),
        mobile: MobileNumber::parse(row.get("mobile")).unwrap(),
        city: CityName::parse(row.get("city")).unwrap(),
        created_at: row.get("created_at"),
        is_read: row.get("is_read"),
    }
}
