use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "session_token";
/// Sessions expire after 24 hours; Redis enforces the TTL.
pub const SESSION_TTL_SECONDS: usize = 24 * 60 * 60;

const ADMIN_ROLE: &str = "admin";

/// Identity and role claim attached to a session token. Stored as JSON under
/// the `session:{token}` key.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    pub role: String,
}

impl SessionClaims {
    pub fn admin(username: String) -> SessionClaims {
        SessionClaims {
            username,
            role: String::from(ADMIN_ROLE),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SessionStoreError {
    #[error("Failed to reach the session store.")]
    RedisError(#[from] redis::RedisError),
    #[error("Stored session claims could not be deserialized.")]
    MalformedClaims(#[from] serde_json::Error),
}

pub fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();

    std::iter::repeat_with(|| rng.sample(rand::distributions::Alphanumeric))
        .map(char::from)
        .take(30)
        .collect()
}

#[tracing::instrument(name = "Store a session in Redis", skip(redis_client, token, claims))]
pub async fn store_session(
    redis_client: &redis::Client,
    token: &str,
    claims: &SessionClaims,
) -> Result<(), SessionStoreError> {
    let mut redis_conn = redis_client.get_tokio_connection().await?;
    let claims_json = serde_json::to_string(claims)?;

    redis::cmd("SET")
        .arg(session_key(token))
        .arg(claims_json)
        .arg("EX")
        .arg(SESSION_TTL_SECONDS)
        .query_async::<_, ()>(&mut redis_conn)
        .await?;

    Ok(())
}

#[tracing::instrument(name = "Fetch a session from Redis", skip(redis_client, token))]
pub async fn fetch_session(
    redis_client: &redis::Client,
    token: &str,
) -> Result<Option<SessionClaims>, SessionStoreError> {
    let mut redis_conn = redis_client.get_tokio_connection().await?;

    let claims_json: Option<String> = redis::cmd("GET")
        .arg(session_key(token))
        .query_async(&mut redis_conn)
        .await?;

    match claims_json {
        Some(claims_json) => Ok(Some(serde_json::from_str(&claims_json)?)),
        None => Ok(None),
    }
}

#[tracing::instrument(name = "Delete a session from Redis", skip(redis_client, token))]
pub async fn delete_session(
    redis_client: &redis::Client,
    token: &str,
) -> Result<(), SessionStoreError> {
    let mut redis_conn = redis_client.get_tokio_connection().await?;

    redis::cmd("DEL")
        .arg(session_key(token))
        .query_async::<_, ()>(&mut redis_conn)
        .await?;

    Ok(())
}

fn session_key(token: &str) -> String {
    format!("session:{}", token)
}
