use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use once_cell::sync::Lazy;

use crate::domain::UserStoreError;

// Verified against when the username is unknown, so both failures cost one argon2 run.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_blocking("no-such-user-placeholder").ok());

fn hash_blocking(password: &str) -> Result<String, UserStoreError> {
    let argon2 = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|_| UserStoreError::UnexpectedError)?,
    );
    let salt = SaltString::generate(&mut OsRng);
    Ok(argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| UserStoreError::UnexpectedError)?
        .to_string())
}

// Hashing is CPU-bound, keep it off the async workers.
pub async fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let password_clone = password.to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&password_clone))
        .await
        .map_err(|_| UserStoreError::UnexpectedError)?
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, UserStoreError> {
    let password_clone = password.to_owned();
    let hash_clone = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed_hash =
            PasswordHash::new(&hash_clone).map_err(|_| UserStoreError::UnexpectedError)?;
        // Parameters are read back from the PHC string.
        match Argon2::default().verify_password(password_clone.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}

/// One argon2 verify against a placeholder hash, result ignored. For lookups that found no user.
pub async fn verify_unknown_user(password: &str) -> Result<(), UserStoreError> {
    let password_clone = password.to_owned();

    tokio::task::spawn_blocking(move || {
        let hash = DUMMY_HASH
            .as_deref()
            .ok_or(UserStoreError::UnexpectedError)?;
        let parsed_hash = PasswordHash::new(hash).map_err(|_| UserStoreError::UnexpectedError)?;
        let _ = Argon2::default().verify_password(password_clone.as_bytes(), &parsed_hash);
        Ok(())
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}
