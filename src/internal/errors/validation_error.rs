use thiserror::Error;

/// 哈希校验失败的原因。
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("文件不存在")]
    NotFound,

    #[error("读取文件失败: {0}")]
    Read(std::io::Error),

    #[error("文件哈希不匹配: 期望 {expected:?}，实际 {actual}")]
    Mismatch { expected: String, actual: String },
}
