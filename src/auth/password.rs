use crate::error::ApiError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password with Argon2id and a fresh random salt.
/// Returns a PHC-format string suitable for the `password_hash` column.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash.
/// `Ok(false)` is a mismatch; `Err` means the stored hash is malformed.
pub fn verify_password(password: &str, phc_hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(phc_hash)
        .map_err(|e| ApiError::Internal(format!("invalid stored password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
