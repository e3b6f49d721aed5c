//! bcrypt-backed `PasswordHasher`.
//!
//! Hashing is CPU bound and runs on the blocking pool so request handling
//! threads keep serving.

use async_trait::async_trait;

use crate::TraceId;
use crate::domain::ports::{HashError, PasswordHasher};
use crate::domain::{Password, PasswordHash};

/// Work factor applied to stored passwords.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Salted bcrypt hasher with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with `cost`; out-of-range costs fail at hash time.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
        let password = password.clone();
        let cost = self.cost;
        let encoded = TraceId::spawn_blocking(move || bcrypt::hash(password.expose(), cost))
            .await
            .map_err(|err| HashError::failed(format!("hashing task did not complete: {err}")))?
            .map_err(|err| HashError::failed(err.to_string()))?;
        Ok(PasswordHash::new(encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    // Lowest cost bcrypt accepts; keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(TEST_COST)
    }

    #[rstest]
    fn default_cost_is_ten() {
        assert_eq!(BcryptPasswordHasher::default().cost(), 10);
    }

    #[rstest]
    #[tokio::test]
    async fn hash_verifies_against_plaintext(hasher: BcryptPasswordHasher) {
        let hash = hasher
            .hash(&Password::new("secret"))
            .await
            .expect("hash succeeds");
        assert_ne!(hash.as_str(), "secret");
        assert!(bcrypt::verify("secret", hash.as_str()).expect("verify runs"));
    }

    #[rstest]
    #[tokio::test]
    async fn identical_passwords_get_distinct_salts(hasher: BcryptPasswordHasher) {
        let password = Password::new("secret");
        let first = hasher.hash(&password).await.expect("first hash");
        let second = hasher.hash(&password).await.expect("second hash");
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_cost_surfaces_hash_error() {
        let err = BcryptPasswordHasher::new(3)
            .hash(&Password::new("secret"))
            .await
            .expect_err("cost below minimum");
        assert!(matches!(err, HashError::Failed { .. }));
    }
}
