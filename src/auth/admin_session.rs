use std::future::Future;
use std::pin::Pin;

use actix_web::http::header::LOCATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use reqwest::StatusCode;

use crate::session::{fetch_session, SESSION_COOKIE_NAME};

/// Request guard for the `/admin` area. Extraction succeeds only when the
/// request carries a session cookie whose stored claims hold the admin role;
/// anything else is sent back to the login page.
pub struct AdminSession {
    pub username: String,
}

#[derive(thiserror::Error)]
#[error("Admin area requires an authenticated admin session.")]
pub struct AuthRedirect;

impl std::fmt::Debug for AuthRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for AuthRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        // Mirrors the front-end behavior: never render admin content, always
        // bounce to the login page.
        HttpResponse::SeeOther()
            .insert_header((LOCATION, "/auth"))
            .finish()
    }
}

impl FromRequest for AdminSession {
    type Error = AuthRedirect;
    type Future = Pin<Box<dyn Future<Output = Result<AdminSession, AuthRedirect>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let redis_client = req.app_data::<web::Data<redis::Client>>().cloned();
        let session_token = req
            .cookie(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());

        Box::pin(async move {
            let redis_client = redis_client.ok_or(AuthRedirect)?;
            let session_token = session_token.ok_or(AuthRedirect)?;

            let claims = fetch_session(&redis_client, &session_token)
                .await
                .map_err(|err| {
                    tracing::error!("Failed to fetch session: {:?}", err);
                    AuthRedirect
                })?
                .ok_or(AuthRedirect)?;

            if !claims.is_admin() {
                return Err(AuthRedirect);
            }

            Ok(AdminSession {
                username: claims.username,
            })
        })
    }
}
