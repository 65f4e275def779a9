//! 下载流程的可插拔能力：开始下载通知与哈希校验。
//!
//! 默认实现（控制台输出、SHA-256 校验）见 `impl_traits`，调用方可以替换成自己的实现。

pub mod impl_traits;
pub mod traits;
