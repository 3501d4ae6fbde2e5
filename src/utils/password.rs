//! 비밀번호 해싱 유틸리티
//!
//! bcrypt 기반의 단방향 해싱/검증 기능을 제공합니다.
//! 솔트는 해시 출력에 포함되므로 검증 시에는 평문과 저장된 해시만 필요합니다.

use std::env;

use crate::errors::AppError;

/// 비밀번호 해싱 능력 인터페이스
///
/// 리포지토리에 생성자 주입되는 시임(seam)입니다. 테스트에서는
/// 실패하거나 결정적인 가짜 구현으로 대체할 수 있습니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문을 솔트 포함 해시로 변환합니다.
    ///
    /// 암호화 프리미티브가 실패하면 (예: cost 파라미터 범위 초과)
    /// `AppError::HashingError`를 반환하며 절대 조용히 삼키지 않습니다.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// 평문을 저장된 해시와 비교합니다.
    ///
    /// 불일치뿐 아니라 해시 입력이 깨진 경우에도 `false`를 반환합니다.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// bcrypt 구현체
///
/// work factor는 생성 시 고정되며, [`BcryptHasher::from_env`]로
/// `BCRYPT_COST` 환경 변수에서 읽어올 수 있습니다.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        BcryptHasher { cost }
    }

    /// `BCRYPT_COST` 환경 변수에서 cost를 읽습니다 (4..=15 범위 밖이면 기본값)
    pub fn from_env() -> Self {
        let cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or(bcrypt::DEFAULT_COST);

        BcryptHasher { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        BcryptHasher::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트에서는 낮은 cost로 충분하다
    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash("Test123*").unwrap();

        assert_ne!(hash, "Test123*");
        assert!(hasher.verify("Test123*", &hash));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hasher = hasher();
        let hash = hasher.hash("Test123*").unwrap();

        assert!(!hasher.verify("Wrong123*", &hash));
    }

    #[test]
    fn test_verify_returns_false_on_malformed_hash() {
        assert!(!hasher().verify("Test123*", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("Test123*").unwrap();
        let second = hasher.hash("Test123*").unwrap();

        // 솔트가 달라 해시도 달라지지만 양쪽 모두 검증에 성공해야 한다
        assert_ne!(first, second);
        assert!(hasher.verify("Test123*", &first));
        assert!(hasher.verify("Test123*", &second));
    }
}
