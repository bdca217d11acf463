//! Password hashing.
//!
//! Hashes are Argon2id PHC strings produced with the default parameters
//! of the `argon2` crate. A hash produced with other parameters still
//! verifies but is reported as needing a rehash.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::error::StoreResult;

/// Outcome of checking a password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Invalid,
    Valid,

    /// The password matches, but the hash should be replaced.
    ValidNeedsRehash,
}

pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, stored: &str) -> StoreResult<Verification> {
    let hash = PasswordHash::new(stored)?;

    match Argon2::default().verify_password(password.as_bytes(), &hash) {
        Ok(()) => {}
        Err(password_hash::Error::Password) => return Ok(Verification::Invalid),
        Err(e) => return Err(e.into()),
    }

    if is_current(&hash) {
        Ok(Verification::Valid)
    } else {
        Ok(Verification::ValidNeedsRehash)
    }
}

fn is_current(hash: &PasswordHash) -> bool {
    if hash.algorithm != Algorithm::default().ident() {
        return false;
    }

    if hash.version != Some(Version::default().into()) {
        return false;
    }

    let current = Params::default();
    match Params::try_from(hash) {
        Ok(params) => {
            params.m_cost() == current.m_cost()
                && params.t_cost() == current.t_cost()
                && params.p_cost() == current.p_cost()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter2").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2"));
        assert_eq!(Verification::Valid, verify_password("hunter2", &hash).unwrap());
        assert_eq!(Verification::Invalid, verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_outdated_params() {
        let params = Params::new(8, 1, 1, None).unwrap();
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(b"hunter2", &salt)
            .unwrap()
            .to_string();

        assert_eq!(
            Verification::ValidNeedsRehash,
            verify_password("hunter2", &hash).unwrap()
        );
        assert_eq!(Verification::Invalid, verify_password("nope", &hash).unwrap());
    }

    #[test]
    fn test_outdated_algorithm() {
        let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, Params::default());
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(b"hunter2", &salt)
            .unwrap()
            .to_string();

        assert_eq!(
            Verification::ValidNeedsRehash,
            verify_password("hunter2", &hash).unwrap()
        );
    }

    #[test]
    fn test_malformed_hash() {
        assert!(verify_password("hunter2", "not a hash").is_err());
    }
}
