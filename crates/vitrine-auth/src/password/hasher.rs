//! bcrypt password hashing and verification.

use vitrine_core::config::AuthConfig;
use vitrine_core::error::AppError;

/// Handles password hashing and verification using bcrypt.
///
/// The work factor comes from configuration; each hash call generates a
/// fresh random salt, so hashing the same password twice yields different
/// digests.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// bcrypt cost factor.
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt digest.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// Errors only when the stored digest is not a valid bcrypt string.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, digest)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hasher() -> PasswordHasher {
        // Minimum bcrypt cost keeps the tests fast; production uses the
        // config default.
        PasswordHasher { cost: 4 }
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = test_hasher();
        let digest = hasher.hash("s3cr3t").unwrap();

        assert!(hasher.verify("s3cr3t", &digest).unwrap());
        assert!(!hasher.verify("wrong", &digest).unwrap());
    }

    #[test]
    fn test_salt_is_randomized_per_call() {
        let hasher = test_hasher();
        let first = hasher.hash("s3cr3t").unwrap();
        let second = hasher.hash("s3cr3t").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("s3cr3t", &first).unwrap());
        assert!(hasher.verify("s3cr3t", &second).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let hasher = test_hasher();
        assert!(hasher.verify("s3cr3t", "not-a-bcrypt-digest").is_err());
    }
}
