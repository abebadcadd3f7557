use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use secrecy::{ExposeSecret, Secret};

use crate::config::AdminSettings;

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Stored password hash is not a valid PHC string.")]
    MalformedHash,
    #[error("Failed to run password verification.")]
    VerificationTaskFailed(#[from] tokio::task::JoinError),
}

/// Checks the submitted credentials against the configured console operator.
///
/// Argon2 verification is CPU-bound, so it runs on the blocking pool instead
/// of stalling the request executor.
#[tracing::instrument(name = "Validate admin credentials", skip(admin, password))]
pub async fn validate_credentials(
    admin: &AdminSettings,
    username: &str,
    password: Secret<String>,
) -> Result<(), CredentialsError> {
    if username != admin.username {
        return Err(CredentialsError::InvalidCredentials);
    }

    let expected_hash = admin.password_hash.clone();
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(expected_hash.expose_secret())
            .map_err(|_| CredentialsError::MalformedHash)?;

        Argon2::default()
            .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
            .map_err(|_| CredentialsError::InvalidCredentials)
    })
    .await?
}

/// Hash a plaintext password into a PHC string suitable for the
/// `admin.password_hash` setting.
pub fn hash_password(password: &Secret<String>) -> String {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .expect("Failed to hash password.")
        .to_string()
}
