use std::fmt;
use std::sync::Arc;

use crate::internal::hooks::impl_traits::{ConsoleNotifier, Sha256Validator};
use crate::internal::hooks::traits::{HashValidator, ProgressNotifier};

/// 哈希校验方式：跳过、默认 SHA-256、自定义校验器。
#[derive(Clone, Default)]
pub enum HashCheck {
    /// 不做下载前的缓存检查，也不做下载后的哈希比对
    Skip,
    #[default]
    Sha256,
    Custom(Arc<dyn HashValidator>),
}

impl HashCheck {
    pub fn validator(&self) -> Option<&dyn HashValidator> {
        match self {
            HashCheck::Skip => None,
            HashCheck::Sha256 => Some(&Sha256Validator),
            HashCheck::Custom(v) => Some(v.as_ref()),
        }
    }
}

impl fmt::Debug for HashCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashCheck::Skip => f.write_str("Skip"),
            HashCheck::Sha256 => f.write_str("Sha256"),
            HashCheck::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// 单次调用的可替换能力：开始通知与哈希校验。默认为控制台输出 + SHA-256 校验。
#[derive(Clone)]
pub struct DownloadOptions {
    pub notifier: Arc<dyn ProgressNotifier>,
    pub hash_check: HashCheck,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            notifier: Arc::new(ConsoleNotifier),
            hash_check: HashCheck::Sha256,
        }
    }
}

impl fmt::Debug for DownloadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadOptions")
            .field("hash_check", &self.hash_check)
            .finish_non_exhaustive()
    }
}

impl DownloadOptions {
    /// 不校验哈希的下载
    pub fn unchecked() -> Self {
        Self {
            hash_check: HashCheck::Skip,
            ..Self::default()
        }
    }

    pub fn with_notifier(mut self, notifier: impl ProgressNotifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn with_hash_check(mut self, hash_check: HashCheck) -> Self {
        self.hash_check = hash_check;
        self
    }

    pub fn with_validator(self, validator: impl HashValidator + 'static) -> Self {
        self.with_hash_check(HashCheck::Custom(Arc::new(validator)))
    }
}
