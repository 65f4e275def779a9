use std::path::Path;

use async_trait::async_trait;

use crate::internal::errors::ValidationError;

/// 哈希校验器：判断 `path` 处的文件是否满足 `expected_hash`。
///
/// 下载前用于命中缓存判断，校验失败只会触发重新下载而不会报错。
#[async_trait]
pub trait HashValidator: Send + Sync {
    async fn validate(
        &self,
        path: &Path,
        expected_hash: &str,
        name: &str,
    ) -> Result<(), ValidationError>;
}
