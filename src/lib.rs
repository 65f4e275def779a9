/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::file::*;
pub use internal::entrance::generic::*;

/// 取消令牌，贯穿请求、读流与写文件的每一个等待点
pub use tokio_util::sync::CancellationToken;

pub mod config {
    use crate::internal;
    pub use internal::config::*;
}

pub mod errors {
    use crate::internal;
    pub use internal::errors::*;
}

/// 单次 GET 能力，不限制死在文件下载流程中，以防有人只要字节流
pub mod fetcher {
    use crate::internal;
    pub use internal::fetcher::structs::*;
}

pub mod hooks {
    pub mod traits {
        use crate::internal;
        pub use internal::hooks::traits::*;
    }

    pub mod impl_traits {
        use crate::internal;
        pub use internal::hooks::impl_traits::*;
        pub use internal::hooks::impl_traits::impl_validator::sha256_hex;
    }
}

pub mod file_downloader {
    use crate::internal;
    pub use internal::file_downloader::structs::*;
}
