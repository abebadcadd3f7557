use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::credentials::{validate_credentials, CredentialsError};
use crate::config::AdminSettings;
use crate::session::{
    delete_session, generate_session_token, store_session, SessionClaims, SESSION_COOKIE_NAME,
};

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(
    name = "Admin login handler",
    skip(body, admin_settings, redis_client),
    fields(username = %body.username)
)]
pub async fn handle_login(
    body: web::Json<LoginBody>,
    admin_settings: web::Data<AdminSettings>,
    redis_client: web::Data<redis::Client>,
) -> impl Responder {
    let body = body.into_inner();

    match validate_credentials(&admin_settings, &body.username, body.password).await {
        Ok(()) => {}
        Err(CredentialsError::InvalidCredentials) => {
            tracing::warn!("Rejected login attempt for {}", body.username);
            return HttpResponse::Unauthorized().finish();
        }
        Err(err) => {
            tracing::error!("Failed to validate credentials: {:?}", err);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let session_token = generate_session_token();
    let claims = SessionClaims::admin(body.username);

    if let Err(err) = store_session(&redis_client, &session_token, &claims).await {
        tracing::error!("Failed to store session: {:?}", err);
        return HttpResponse::InternalServerError().finish();
    }

    let session_cookie = Cookie::build(SESSION_COOKIE_NAME, session_token)
        .path("/")
        .http_only(true)
        .finish();

    HttpResponse::Ok().cookie(session_cookie).json(serde_json::json!({
        "username": claims.username,
        "role": claims.role
    }))
}

#[tracing::instrument(name = "Admin logout handler", skip(request, redis_client))]
pub async fn handle_logout(
    request: HttpRequest,
    redis_client: web::Data<redis::Client>,
) -> impl Responder {
    if let Some(session_cookie) = request.cookie(SESSION_COOKIE_NAME) {
        if let Err(err) = delete_session(&redis_client, session_cookie.value()).await {
            tracing::error!("Failed to delete session: {:?}", err);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let mut removal_cookie = Cookie::new(SESSION_COOKIE_NAME, "");
    removal_cookie.set_path("/");
    removal_cookie.make_removal();

    HttpResponse::Ok().cookie(removal_cookie).finish()
}
