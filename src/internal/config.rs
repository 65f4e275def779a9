use serde::{Deserialize, Serialize};

/// 默认读缓冲大小：1MB
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// 默认目录权限：仅所有者可读写执行
pub const DEFAULT_DIR_MODE: u32 = 0o700;

/// 下载器配置；可由上层应用从自己的配置文件反序列化，缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloaderConfig {
    /// 每次从响应流读取的最大字节数
    pub buffer_size: usize,
    /// 创建目标目录时使用的权限位（仅 unix 生效）
    pub dir_mode: u32,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl DownloaderConfig {
    /// 实际使用的缓冲大小，0 视为默认值。
    pub(crate) fn effective_buffer_size(&self) -> usize {
        if self.buffer_size == 0 {
            DEFAULT_BUFFER_SIZE
        } else {
            self.buffer_size
        }
    }
}
