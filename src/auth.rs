//! Staff credential hashing and verification (Argon2)

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::config::StaffConfig;

/// Hash a password into a PHC string suitable for `STAFF_PASSWORD_HASH`
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a password against a PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Check staff login credentials against configuration.
///
/// Always fails when no password hash is configured.
pub fn verify_staff(staff: &StaffConfig, username: &str, password: &str) -> bool {
    let Some(hash) = staff.password_hash.as_deref() else {
        return false;
    };
    // Hash check runs whatever the username
    let password_ok = verify_password(password, hash);
    password_ok && username == staff.username
}
