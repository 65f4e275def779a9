//! 取数器：对单个 URL 发起一次可取消的 GET，并把响应体交给调用方读取。
//!
//! 不做重试、不检查 HTTP 状态码；状态码可通过 [`structs::ByteStream::status`] 自行判断。

pub mod structs;

pub use structs::Fetcher;
