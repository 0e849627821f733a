//! bcrypt-backed password hasher

use bs_shared::PasswordConfig;

use crate::errors::DomainError;

/// Salted, work-factor based password hashing
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from_config(&PasswordConfig::default())
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self::from_config(&PasswordConfig::new(cost))
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a salted digest of `plaintext`
    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }

    /// Check `plaintext` against a stored digest
    ///
    /// A digest that cannot be parsed is an `Internal` error, not a mismatch.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, digest)
            .map_err(|e| DomainError::internal(format!("password verification failed: {}", e)))
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, DomainError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, DomainError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_shared::config::auth::MIN_BCRYPT_COST;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
        let digest = hasher.hash("correct horse").unwrap();

        assert_ne!(digest, "correct horse");
        assert!(hasher.verify("correct horse", &digest).unwrap());
        assert!(!hasher.verify("battery staple", &digest).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
        let first = hasher.hash("same password").unwrap();
        let second = hasher.hash("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
        let result = hasher.verify("anything", "not-a-bcrypt-digest");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(PasswordHasher::new(0).cost(), MIN_BCRYPT_COST);
        assert_eq!(PasswordHasher::default().cost(), 10);
    }

    #[tokio::test]
    async fn test_blocking_variants() {
        let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
        let digest = hasher.hash_blocking("secret-pass".to_string()).await.unwrap();
        assert!(hasher
            .verify_blocking("secret-pass".to_string(), digest)
            .await
            .unwrap());
    }
}
