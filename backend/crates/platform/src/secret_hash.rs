//! Salted keyed hashing of arbitrary secrets
//!
//! Argon2id in PHC string format. Used directly for product keys and, through
//! [`crate::password`], for user passwords.
//!
//! A PHC string carries its own salt and parameters, so verification only
//! needs the candidate secret and the stored string.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretHashError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hash format")]
    InvalidHashFormat,
}

/// Hash `secret` with a fresh random salt, optionally peppered
///
/// OWASP recommended Argon2id parameters (the crate defaults):
/// m=19456 (19 MiB), t=2, p=1
pub fn hash_secret(secret: &[u8], pepper: Option<&[u8]>) -> Result<String, SecretHashError> {
    let input = peppered(secret, pepper);
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(&input, &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SecretHashError::HashingFailed(e.to_string()))
}

/// Check `secret` against a PHC string
///
/// Anything that is not a well-formed PHC string simply does not match.
/// Neither does one whose algorithm or cost parameters differ from what
/// [`hash_secret`] writes; those are never run through Argon2.
/// Argon2 compares the digests in constant time.
pub fn verify_secret(secret: &[u8], phc: &str, pepper: Option<&[u8]>) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    if !has_default_params(&parsed) {
        return false;
    }

    Argon2::default()
        .verify_password(&peppered(secret, pepper), &parsed)
        .is_ok()
}

/// Reject strings that are not PHC-formatted
pub fn validate_phc(phc: &str) -> Result<(), SecretHashError> {
    PasswordHash::new(phc)
        .map(|_| ())
        .map_err(|_| SecretHashError::InvalidHashFormat)
}

/// Argon2id, v=19 and the default m/t/p costs
fn has_default_params(parsed: &PasswordHash<'_>) -> bool {
    if parsed.algorithm != Algorithm::Argon2id.ident() {
        return false;
    }
    if parsed.version.is_some_and(|v| v != u32::from(Version::V0x13)) {
        return false;
    }

    let Ok(params) = Params::try_from(parsed) else {
        return false;
    };
    let expected = Params::default();
    params.m_cost() == expected.m_cost()
        && params.t_cost() == expected.t_cost()
        && params.p_cost() == expected.p_cost()
}

fn peppered(secret: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut combined = secret.to_vec();
    if let Some(p) = pepper {
        combined.extend_from_slice(p);
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let phc = hash_secret(b"a@x.com-REALTOR-s", None).unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(verify_secret(b"a@x.com-REALTOR-s", &phc, None));
        assert!(!verify_secret(b"a@x.com-ADMIN-s", &phc, None));
    }

    #[test]
    fn test_salted() {
        let first = hash_secret(b"same", None).unwrap();
        let second = hash_secret(b"same", None).unwrap();
        assert_ne!(first, second);
        assert!(verify_secret(b"same", &first, None));
        assert!(verify_secret(b"same", &second, None));
    }

    #[test]
    fn test_pepper() {
        let phc = hash_secret(b"secret", Some(b"pepper")).unwrap();
        assert!(verify_secret(b"secret", &phc, Some(b"pepper")));
        assert!(!verify_secret(b"secret", &phc, None));
        assert!(!verify_secret(b"secret", &phc, Some(b"other")));
    }

    #[test]
    fn test_garbage_never_matches() {
        assert!(!verify_secret(b"anything", "bad", None));
        assert!(!verify_secret(b"anything", "", None));
        assert!(validate_phc("bad").is_err());
    }

    #[test]
    fn test_foreign_cost_params_rejected() {
        let phc = hash_secret(b"secret", None).unwrap();
        assert!(validate_phc(&phc).is_ok());

        // same salt and digest, attacker-chosen costs
        let costly = phc.replace("m=19456,t=2,p=1", "m=262144,t=16,p=1");
        assert_ne!(costly, phc);
        let started = std::time::Instant::now();
        assert!(!verify_secret(b"secret", &costly, None));
        assert!(started.elapsed() < std::time::Duration::from_millis(100));

        let argon2i = phc.replace("$argon2id$", "$argon2i$");
        assert!(!verify_secret(b"secret", &argon2i, None));
    }
}
