use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::internal::errors::ValidationError;
use crate::internal::hooks::traits::HashValidator;

/// 默认校验器：整文件读入后计算 SHA-256，与期望值忽略大小写比较。
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Validator;

#[async_trait]
impl HashValidator for Sha256Validator {
    async fn validate(
        &self,
        path: &Path,
        expected_hash: &str,
        name: &str,
    ) -> Result<(), ValidationError> {
        let data = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ValidationError::NotFound,
            _ => ValidationError::Read(e),
        })?;

        let actual = sha256_hex(&data);
        if !hash_matches(expected_hash, &actual) {
            return Err(ValidationError::Mismatch {
                expected: expected_hash.to_string(),
                actual,
            });
        }

        println!("{name} ... OK");
        Ok(())
    }
}

/// 计算内容的 SHA-256，返回小写十六进制。
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// 期望值忽略大小写；空字符串永远不匹配。
pub(crate) fn hash_matches(expected: &str, actual: &str) -> bool {
    !expected.is_empty() && expected.eq_ignore_ascii_case(actual)
}
